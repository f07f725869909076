use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

const NETWORK_LATENCY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Friends,
    Coworkers,
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactKind::Friends => f.write_str("friends"),
            ContactKind::Coworkers => f.write_str("coworkers"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    email: String,
    name: String,
    contacts: HashMap<ContactKind, Vec<String>>,
}

impl Profile {
    /// Contacts are `"kind:email"` pairs; a bare email counts as a friend.
    pub fn new(email: &str, name: &str, contacts: &[&str]) -> Self {
        let mut parsed: HashMap<ContactKind, Vec<String>> = HashMap::new();
        for contact in contacts {
            let (kind, address) = match contact.split_once(':') {
                Some(("coworkers", address)) => (ContactKind::Coworkers, address),
                Some((_, address)) => (ContactKind::Friends, address),
                None => (ContactKind::Friends, *contact),
            };
            parsed.entry(kind).or_default().push(address.to_string());
        }
        Self {
            email: email.to_string(),
            name: name.to_string(),
            contacts: parsed,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contacts(&self, kind: ContactKind) -> &[String] {
        self.contacts.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The remote side of a social network: slow calls that return emails and
/// profiles.
pub trait SocialNetwork {
    fn request_contact_emails(
        &self,
        ctx: &mut DemoContext<'_>,
        profile_email: &str,
        kind: ContactKind,
    ) -> Vec<String>;

    fn request_profile(&self, ctx: &mut DemoContext<'_>, email: &str) -> Option<Profile>;

    fn create_friends_iterator<'n>(&'n self, profile_email: &str) -> ProfileIterator<'n>
    where
        Self: Sized + 'n,
    {
        ProfileIterator::new(self, ContactKind::Friends, profile_email)
    }

    fn create_coworkers_iterator<'n>(&'n self, profile_email: &str) -> ProfileIterator<'n>
    where
        Self: Sized + 'n,
    {
        ProfileIterator::new(self, ContactKind::Coworkers, profile_email)
    }
}

fn find_profile<'p>(profiles: &'p [Profile], email: &str) -> Option<&'p Profile> {
    profiles.iter().find(|p| p.email() == email)
}

pub struct Facebook {
    profiles: Vec<Profile>,
}

impl Facebook {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }
}

impl SocialNetwork for Facebook {
    fn request_contact_emails(
        &self,
        ctx: &mut DemoContext<'_>,
        profile_email: &str,
        kind: ContactKind,
    ) -> Vec<String> {
        ctx.pause(NETWORK_LATENCY);
        ctx.say(format!(
            "Facebook: Loading \"{}\" list of \"{}\" over the network...",
            kind, profile_email
        ));
        find_profile(&self.profiles, profile_email)
            .map(|p| p.contacts(kind).to_vec())
            .unwrap_or_default()
    }

    fn request_profile(&self, ctx: &mut DemoContext<'_>, email: &str) -> Option<Profile> {
        ctx.pause(NETWORK_LATENCY);
        ctx.say(format!("Facebook: Loading profile {} over the network...", email));
        find_profile(&self.profiles, email).cloned()
    }
}

pub struct LinkedIn {
    contacts: Vec<Profile>,
}

impl LinkedIn {
    pub fn new(contacts: Vec<Profile>) -> Self {
        Self { contacts }
    }
}

impl SocialNetwork for LinkedIn {
    fn request_contact_emails(
        &self,
        ctx: &mut DemoContext<'_>,
        profile_email: &str,
        kind: ContactKind,
    ) -> Vec<String> {
        ctx.pause(NETWORK_LATENCY);
        ctx.say(format!(
            "LinkedIn: Loading \"{}\" list of {} over the network...",
            kind, profile_email
        ));
        find_profile(&self.contacts, profile_email)
            .map(|p| p.contacts(kind).to_vec())
            .unwrap_or_default()
    }

    fn request_profile(&self, ctx: &mut DemoContext<'_>, email: &str) -> Option<Profile> {
        ctx.pause(NETWORK_LATENCY);
        ctx.say(format!(
            "LinkedIn: Loading profile \"{}\" over the network...",
            email
        ));
        find_profile(&self.contacts, email).cloned()
    }
}

/// Walks one kind of contact list. The email list is fetched on first use
/// and every profile is fetched once, then kept.
pub struct ProfileIterator<'n> {
    network: &'n dyn SocialNetwork,
    kind: ContactKind,
    email: String,
    current_position: usize,
    emails: Option<Vec<String>>,
    profiles: Vec<Option<Profile>>,
}

impl<'n> ProfileIterator<'n> {
    pub fn new(network: &'n dyn SocialNetwork, kind: ContactKind, email: &str) -> Self {
        Self {
            network,
            kind,
            email: email.to_string(),
            current_position: 0,
            emails: None,
            profiles: Vec::new(),
        }
    }

    fn lazy_load(&mut self, ctx: &mut DemoContext<'_>) -> &[String] {
        if self.emails.is_none() {
            let emails = self
                .network
                .request_contact_emails(ctx, &self.email, self.kind);
            self.profiles = vec![None; emails.len()];
            self.emails = Some(emails);
        }
        self.emails.as_deref().unwrap_or(&[])
    }

    pub fn has_next(&mut self, ctx: &mut DemoContext<'_>) -> bool {
        let position = self.current_position;
        position < self.lazy_load(ctx).len()
    }

    pub fn get_next(&mut self, ctx: &mut DemoContext<'_>) -> Option<Profile> {
        if !self.has_next(ctx) {
            return None;
        }
        let position = self.current_position;
        let email = self.lazy_load(ctx)[position].clone();

        if self.profiles[position].is_none() {
            let profile = self.network.request_profile(ctx, &email).unwrap_or_else(|| {
                tracing::warn!("👤 No profile found for {}", email);
                Profile::new(&email, "", &[])
            });
            self.profiles[position] = Some(profile);
        }

        self.current_position += 1;
        self.profiles[position].clone()
    }

    pub fn reset(&mut self) {
        self.current_position = 0;
    }
}

pub struct SocialSpammer<'n, N: SocialNetwork> {
    network: &'n N,
}

impl<'n, N: SocialNetwork> SocialSpammer<'n, N> {
    pub fn new(network: &'n N) -> Self {
        Self { network }
    }

    pub fn send_spam_to_friends(
        &self,
        ctx: &mut DemoContext<'_>,
        profile_email: &str,
        message: &str,
    ) -> usize {
        ctx.blank();
        ctx.say(" Iterating over friends...");
        ctx.blank();
        let iterator = self.network.create_friends_iterator(profile_email);
        Self::spam(ctx, iterator, message)
    }

    pub fn send_spam_to_coworkers(
        &self,
        ctx: &mut DemoContext<'_>,
        profile_email: &str,
        message: &str,
    ) -> usize {
        ctx.blank();
        ctx.say(" Iterating over coworkers...");
        ctx.blank();
        let iterator = self.network.create_coworkers_iterator(profile_email);
        Self::spam(ctx, iterator, message)
    }

    fn spam(
        ctx: &mut DemoContext<'_>,
        mut iterator: ProfileIterator<'_>,
        message: &str,
    ) -> usize {
        let mut sent = 0;
        while let Some(profile) = iterator.get_next(ctx) {
            ctx.say(format!(
                "Sent message to: {}. Message body: {}",
                profile.email(),
                message
            ));
            sent += 1;
        }
        sent
    }
}

pub fn test_profiles() -> Vec<Profile> {
    vec![
        Profile::new(
            "anna.smith@bing.com",
            "Anna Smith",
            &[
                "friends:mad_max@ya.com",
                "friends:catwoman@yahoo.com",
                "coworkers:sam@amazon.com",
            ],
        ),
        Profile::new(
            "mad_max@ya.com",
            "Maximilian",
            &["friends:anna.smith@bing.com", "coworkers:sam@amazon.com"],
        ),
        Profile::new("bill@microsoft.eu", "Billie", &["coworkers:avanger@ukr.net"]),
        Profile::new("avanger@ukr.net", "Jonh Day", &["coworkers:bill@microsoft.eu"]),
        Profile::new(
            "sam@amazon.com",
            "Sam Kitting",
            &[
                "coworkers:anna.smith@bing.com",
                "coworkers:mad_max@ya.com",
                "friends:catwoman@yahoo.com",
            ],
        ),
        Profile::new(
            "catwoman@yahoo.com",
            "Liza",
            &["friends:anna.smith@bing.com", "friends:sam@amazon.com"],
        ),
    ]
}

const TARGET: &str = "anna.smith@bing.com";
const FRIENDS_MESSAGE: &str =
    "Hey! This is Anna's friend Josh. Can you do me a favor and like this post [link]?";
const COWORKERS_MESSAGE: &str =
    "Hey! This is Anna's boss Jason. Anna told me you would be interested in [link].";

fn spam_everyone<N: SocialNetwork>(ctx: &mut DemoContext<'_>, network: &N) {
    let spammer = SocialSpammer::new(network);
    let friends = spammer.send_spam_to_friends(ctx, TARGET, FRIENDS_MESSAGE);
    let coworkers = spammer.send_spam_to_coworkers(ctx, TARGET, COWORKERS_MESSAGE);
    tracing::debug!("📨 Spammed {} friends and {} coworkers", friends, coworkers);
}

pub struct SocialSpammerDemo;

impl Demo for SocialSpammerDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "iterator-social",
            pattern: "Iterator",
            category: Category::Behavioral,
            summary: "Lazy profile iterators walk Facebook or LinkedIn contacts",
            interactive: true,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        ctx.say("Please specify social network to target spam tool (default:Facebook)");
        ctx.say("1 - Facebook");
        ctx.say("2 - LinkedIn");
        let choice = ctx.ask("Please make your choice: ")?;

        if choice.trim() == "2" {
            spam_everyone(ctx, &LinkedIn::new(test_profiles()));
        } else {
            spam_everyone(ctx, &Facebook::new(test_profiles()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_profile_parses_contacts() {
        let profile = Profile::new("a@x", "A", &["coworkers:b@x", "c@x", "friends:d@x"]);
        assert_eq!(profile.contacts(ContactKind::Coworkers), ["b@x"]);
        assert_eq!(profile.contacts(ContactKind::Friends), ["c@x", "d@x"]);
    }

    #[test]
    fn test_iterator_loads_lazily_and_caches_profiles() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default().without_latency());
        let network = Facebook::new(test_profiles());
        let mut iterator = network.create_friends_iterator(TARGET);

        let first = iterator.get_next(&mut ctx).map(|p| p.email().to_string());
        let second = iterator.get_next(&mut ctx).map(|p| p.email().to_string());
        assert_eq!(first.as_deref(), Some("mad_max@ya.com"));
        assert_eq!(second.as_deref(), Some("catwoman@yahoo.com"));
        assert!(iterator.get_next(&mut ctx).is_none());

        iterator.reset();
        assert!(iterator.get_next(&mut ctx).is_some());
        drop(ctx);

        // 一次清單 + 兩次個人資料，reset 後不再重新下載
        let loads = console
            .lines()
            .iter()
            .filter(|l| l.starts_with("Facebook: Loading"))
            .count();
        assert_eq!(loads, 3);
    }

    #[test]
    fn test_unknown_profile_has_no_contacts() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default().without_latency());
        let network = LinkedIn::new(test_profiles());
        let mut iterator = network.create_coworkers_iterator("nobody@nowhere");
        assert!(!iterator.has_next(&mut ctx));
    }
}
