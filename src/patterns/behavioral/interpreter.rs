use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// A tiny grammar of word rules, evaluated by substring containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Terminal(String),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn terminal(word: &str) -> Self {
        Expression::Terminal(word.to_string())
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn interpret(&self, text: &str) -> bool {
        match self {
            Expression::Terminal(word) => text.contains(word.as_str()),
            Expression::And(left, right) => left.interpret(text) && right.interpret(text),
            Expression::Or(left, right) => left.interpret(text) || right.interpret(text),
        }
    }
}

pub struct RulesDemo;

impl Demo for RulesDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "interpreter-rules",
            pattern: "Interpreter",
            category: Category::Behavioral,
            summary: "And/Or expression trees decide whether a text mentions the right names",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let jonh = Expression::terminal("Jonh");
        let henry = Expression::terminal("Henry");
        let mary = Expression::terminal("Mary");
        let sarah = Expression::terminal("Sarah");

        let rule1 = Expression::and(jonh, henry);
        let rule2 = Expression::or(mary, rule1.clone());
        let rule3 = Expression::and(sarah, rule2.clone());

        let script: [(&Expression, &[&str]); 3] = [
            (&rule1, &["Jonh", "Henry", "Jonh + Henry"]),
            (
                &rule2,
                &["Jonh", "Henry", "Mary", "Jonh + Henry", "Jonh + Henry + Mary"],
            ),
            (
                &rule3,
                &[
                    "Mary",
                    "Sarah",
                    "Jonh + Henry",
                    "Jonh + Henry + Mary",
                    "Mary + Sarah",
                    "Jonh + Henry + Sarah",
                    "Mary + Jonh + Henry + Sarah",
                ],
            ),
        ];

        for (rule, texts) in script {
            for text in texts {
                let verdict = if rule.interpret(text) { "True" } else { "False" };
                ctx.say(verdict);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule3() -> Expression {
        let rule1 = Expression::and(Expression::terminal("Jonh"), Expression::terminal("Henry"));
        let rule2 = Expression::or(Expression::terminal("Mary"), rule1);
        Expression::and(Expression::terminal("Sarah"), rule2)
    }

    #[test]
    fn test_nested_rule() {
        let rule = rule3();
        assert!(!rule.interpret("Mary"));
        assert!(!rule.interpret("Jonh + Henry + Mary"));
        assert!(rule.interpret("Mary + Sarah"));
        assert!(rule.interpret("Jonh + Henry + Sarah"));
    }

    #[test]
    fn test_terminal_is_substring_match() {
        assert!(Expression::terminal("Mary").interpret("Rosemary and Mary-Ann"));
        assert!(!Expression::terminal("Mary").interpret("mary"));
    }
}
