//! Keyword rule table behind the assistant's canned answers.

use thiserror::Error;

/// Answer given when no rule matches.
pub const FALLBACK_RESPONSE: &str =
    "Sorry, I don't have an answer for that. Can you ask something else?";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleBookError {
    #[error("rule {index} has no keywords")]
    NoKeywords { index: usize },
    #[error("rule {index} contains a blank keyword")]
    BlankKeyword { index: usize },
    #[error("rule {index} has an empty response")]
    EmptyResponse { index: usize },
}

/// A set of trigger keywords and the answer they select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRule {
    keywords: Vec<String>,
    response: String,
}

impl ResponseRule {
    /// Keywords are stored lower-cased so matching only lower-cases the utterance.
    pub fn new<I, S>(keywords: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
            response: response.into(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    fn matches(&self, lowered_utterance: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_utterance.contains(keyword.as_str()))
    }
}

/// Ordered rule table. Table order is the priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<ResponseRule>,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

impl RuleBook {
    pub fn new(rules: Vec<ResponseRule>) -> Result<Self, RuleBookError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(RuleBookError::NoKeywords { index });
            }
            // An empty keyword is a substring of everything and would shadow later rules.
            if rule.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(RuleBookError::BlankKeyword { index });
            }
            if rule.response.trim().is_empty() {
                return Err(RuleBookError::EmptyResponse { index });
            }
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Picks the answer of the first rule with a keyword inside `utterance`.
pub fn respond<'a>(utterance: &str, rules: &'a RuleBook) -> &'a str {
    let lowered = utterance.to_lowercase();

    rules
        .rules()
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(ResponseRule::response)
        .unwrap_or(FALLBACK_RESPONSE)
}

fn default_rules() -> Vec<ResponseRule> {
    vec![
        ResponseRule::new(
            ["recycle", "recycling", "e-waste", "electronic recycling", "upcycle", "upcycling"],
            "Recycling helps reduce waste and conserve resources. Consider upcycling or using community programs for electronic recycling.",
        ),
        ResponseRule::new(
            ["water", "water saving", "conserve water", "low-flow", "irrigation"],
            "Water conservation can be achieved through rainwater harvesting, low-flow faucets, and DIY irrigation systems for gardens.",
        ),
        ResponseRule::new(
            ["heat", "heating", "thermostat", "programmable thermostat", "insulation"],
            "To save on heating costs, consider using programmable thermostats and proper insulation.",
        ),
        ResponseRule::new(
            ["electricity", "electric", "energy saving", "light bulb", "solar panel"],
            "To save electricity, switch to energy-efficient appliances, use LED light bulbs, and consider installing solar panel systems.",
        ),
        ResponseRule::new(
            ["waste", "waste management", "compost", "kitchen waste"],
            "Effective waste management includes recycling, composting organic kitchen waste, and reducing single-use plastics.",
        ),
        ResponseRule::new(
            ["transport", "transportation", "public transport", "carpool", "cycle", "bike"],
            "Consider public transportation, carpooling, or cycling to reduce emissions and save money.",
        ),
        ResponseRule::new(
            ["housing", "house", "accommodation", "affordable housing", "shared housing"],
            "Looking for affordable housing? Check community resources and consider shared accommodations.",
        ),
        ResponseRule::new(
            ["language", "learn language", "language learning", "language classes", "language tools"],
            "Language learning resources include online tools, mobile apps, and local community classes.",
        ),
        ResponseRule::new(
            ["meal", "meal plan", "meal planning", "food plan", "save food", "food waste"],
            "Plan meals for the week to save time and reduce food waste. Check out our meal planning tips.",
        ),
        ResponseRule::new(
            ["budget", "budgeting", "saving money", "track expenses", "expense tracker"],
            "Track your expenses and set saving goals. Use our budget tracking tips for help.",
        ),
        ResponseRule::new(
            ["insurance", "health insurance", "car insurance", "home insurance"],
            "Insurance is essential for health, home, and car safety. Learn more in our resources.",
        ),
        ResponseRule::new(
            ["hello", "hi", "hey", "greetings", "yo"],
            "Hello! How can I assist you today?",
        ),
    ]
}
