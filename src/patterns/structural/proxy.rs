use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub data: String,
}

impl Video {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            data: "Random video.".to_string(),
        }
    }
}

pub trait YoutubeLib {
    fn popular_videos(&mut self, ctx: &mut DemoContext<'_>) -> Vec<Video>;
    fn get_video(&mut self, ctx: &mut DemoContext<'_>, video_id: &str) -> Video;
}

/// The slow remote service. Every call pays for a round trip.
#[derive(Debug, Default)]
pub struct ThirdPartyYoutube {
    calls: usize,
}

impl ThirdPartyYoutube {
    pub fn calls(&self) -> usize {
        self.calls
    }

    fn experience_network_latency(ctx: &mut DemoContext<'_>) {
        let millis = ctx.roll(500..=1000);
        ctx.pause(Duration::from_millis(u64::from(millis)));
    }

    fn connect_to_server(&mut self, ctx: &mut DemoContext<'_>, server: &str) {
        self.calls += 1;
        ctx.say(format!("Connecting to {} ...", server));
        Self::experience_network_latency(ctx);
        ctx.say("Connected!");
        ctx.blank();
    }
}

impl YoutubeLib for ThirdPartyYoutube {
    fn popular_videos(&mut self, ctx: &mut DemoContext<'_>) -> Vec<Video> {
        self.connect_to_server(ctx, "https://youtube.com");
        ctx.say("Downloading populars...");
        Self::experience_network_latency(ctx);

        let videos = vec![
            Video::new("catzzzzzzzzz", "Catzzzz.avi"),
            Video::new("mkafksangasj", "Dog play with ball.mp4"),
            Video::new("dancesvideoo", "Dancing video.mpq"),
            Video::new("dlsdk5jfslaf", "Barcelona vs RealM.mov"),
            Video::new("3sdfgsd1j333", "Programing lesson#1.avi"),
        ];

        ctx.say("Done!");
        ctx.blank();
        videos
    }

    fn get_video(&mut self, ctx: &mut DemoContext<'_>, video_id: &str) -> Video {
        self.connect_to_server(ctx, &format!("https://youtube.com/{}/", video_id));
        ctx.say("Downloading video...");
        Self::experience_network_latency(ctx);
        let video = Video::new(video_id, "Some video title");
        ctx.say("Done!");
        ctx.blank();
        video
    }
}

/// Same interface as the service, answers repeated requests locally.
#[derive(Debug, Default)]
pub struct YoutubeCacheProxy {
    service: ThirdPartyYoutube,
    cache_popular: Vec<Video>,
    cache_all: HashMap<String, Video>,
}

impl YoutubeCacheProxy {
    pub fn service_calls(&self) -> usize {
        self.service.calls()
    }

    pub fn reset(&mut self) {
        self.cache_popular.clear();
        self.cache_all.clear();
    }
}

impl YoutubeLib for YoutubeCacheProxy {
    fn popular_videos(&mut self, ctx: &mut DemoContext<'_>) -> Vec<Video> {
        if self.cache_popular.is_empty() {
            self.cache_popular = self.service.popular_videos(ctx);
        } else {
            ctx.say("Retrieved list from cache.");
        }
        self.cache_popular.clone()
    }

    fn get_video(&mut self, ctx: &mut DemoContext<'_>, video_id: &str) -> Video {
        if let Some(video) = self.cache_all.get(video_id) {
            ctx.say(format!("Retrieved video {} from cache.", video_id));
            return video.clone();
        }
        let video = self.service.get_video(ctx, video_id);
        self.cache_all.insert(video_id.to_string(), video.clone());
        video
    }
}

pub struct YoutubeDownloader<L: YoutubeLib> {
    api: L,
}

impl<L: YoutubeLib> YoutubeDownloader<L> {
    pub fn new(api: L) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &L {
        &self.api
    }

    pub fn render_video_page(&mut self, ctx: &mut DemoContext<'_>, video_id: &str) {
        let video = self.api.get_video(ctx, video_id);
        ctx.blank();
        ctx.say("-------------------------------");
        ctx.say("Video page (imagine fancy HTML)");
        ctx.say(format!("ID: {}", video.id));
        ctx.say(format!("Title: {}", video.title));
        ctx.say(format!("Video: {}", video.data));
        ctx.say("-------------------------------");
        ctx.blank();
    }

    pub fn render_popular_videos(&mut self, ctx: &mut DemoContext<'_>) {
        let videos = self.api.popular_videos(ctx);
        ctx.blank();
        ctx.say("-------------------------------");
        ctx.say("Most popular videos on Youtube (imagine fancy HTML)");
        for video in videos {
            ctx.say(format!("ID: {} / Title: {}", video.id, video.title));
        }
        ctx.say("-------------------------------");
        ctx.blank();
    }

    /// 模擬使用者的瀏覽行為，回傳花費的時間
    pub fn browse(&mut self, ctx: &mut DemoContext<'_>) -> Duration {
        let start_time = Instant::now();

        self.render_popular_videos(ctx);
        self.render_video_page(ctx, "catzzzzzzzzz");
        self.render_popular_videos(ctx);
        self.render_video_page(ctx, "dancesvideoo");
        self.render_video_page(ctx, "catzzzzzzzzz");
        self.render_video_page(ctx, "someothervid");

        let elapsed = start_time.elapsed();
        ctx.say(format!("Time elapsed {} ms.", elapsed.as_millis()));
        ctx.blank();
        elapsed
    }
}

pub struct CachingProxyDemo;

impl Demo for CachingProxyDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "proxy-video-cache",
            pattern: "Proxy",
            category: Category::Structural,
            summary: "A caching proxy saves repeated trips to a slow video service",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut naive = YoutubeDownloader::new(ThirdPartyYoutube::default());
        let mut smart = YoutubeDownloader::new(YoutubeCacheProxy::default());

        let naive_time = naive.browse(ctx);
        let smart_time = smart.browse(ctx);
        tracing::debug!(
            "📡 Service calls: naive {}, cached {}",
            naive.api().calls(),
            smart.api().service_calls()
        );

        let saved = naive_time.saturating_sub(smart_time);
        ctx.say(format!("Time saved by caching proxy: {} ms.", saved.as_millis()));
        Ok(())
    }
}

// 保護代理

pub trait Subject {
    fn request(&self, ctx: &mut DemoContext<'_>);
}

pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("The real thing is dealing with the request");
    }
}

pub struct Proxy<S: Subject> {
    real_subject: S,
}

impl<S: Subject> Proxy<S> {
    pub fn new(real_subject: S) -> Self {
        Self { real_subject }
    }
}

impl<S: Subject> Subject for Proxy<S> {
    fn request(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Proxy may be doing something, like controlling request access.");
        self.real_subject.request(ctx);
    }
}

pub trait Blog {
    fn read(&self, ctx: &mut DemoContext<'_>);
    fn write(&self, ctx: &mut DemoContext<'_>);
}

pub struct PersonalBlog;

impl Blog for PersonalBlog {
    fn read(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Read the blog");
    }

    fn write(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Write the blog");
    }
}

/// Anonymous visitors may read but never write.
pub struct AnonUserBlogProxy<'b> {
    blog: &'b dyn Blog,
}

impl<'b> AnonUserBlogProxy<'b> {
    pub fn new(blog: &'b dyn Blog) -> Self {
        Self { blog }
    }
}

impl Blog for AnonUserBlogProxy<'_> {
    fn read(&self, ctx: &mut DemoContext<'_>) {
        self.blog.read(ctx);
    }

    fn write(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Only authorized users can write blog posts.");
    }
}

pub struct AccessProxyDemo;

impl Demo for AccessProxyDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "proxy-access",
            pattern: "Proxy",
            category: Category::Structural,
            summary: "Proxies stand in for a subject and decide what reaches it",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        RealSubject.request(ctx);
        Proxy::new(RealSubject).request(ctx);

        let blog = PersonalBlog;
        blog.write(ctx);

        let proxy = AnonUserBlogProxy::new(&blog);
        proxy.read(ctx);
        proxy.write(ctx);
        Ok(())
    }
}
