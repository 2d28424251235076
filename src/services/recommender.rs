use crate::models::ChatResponse;

pub const DEFAULT_REPLY: &str = "Welcome to Étoile Noire. Tell me what you enjoy (steak, vegan, wine) or say 'reserve' to book a table.";

#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub suggestions: &'static [&'static str],
    pub fragment: &'static str,
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["wine", "pairing", "sommelier"],
        suggestions: &["Grand Cru Burgundy 2015", "Vintage Champagne Brut 2008"],
        fragment: "Our sommelier recommends a Grand Cru Burgundy with rich mains or a vintage Champagne to open the evening.",
    },
    Rule {
        keywords: &["steak", "beef", "wagyu"],
        suggestions: &["A5 Miyazaki Wagyu with black truffle jus"],
        fragment: "Our signature A5 Wagyu is seared over binchotan and finished with truffle jus.",
    },
    Rule {
        keywords: &["vegan", "vegetarian"],
        suggestions: &["Charred Romanesco with almond velouté"],
        fragment: "We offer refined plant-forward courses like Charred Romanesco with almond velouté.",
    },
    Rule {
        keywords: &["dessert", "sweet", "chocolate"],
        suggestions: &["72% Dark Chocolate Marquis with gold leaf"],
        fragment: "For dessert, the Dark Chocolate Marquis adorned with gold leaf is exquisite.",
    },
    Rule {
        keywords: &["book", "reserve", "table", "reservation"],
        suggestions: &[],
        fragment: "I can book a table for you. Please share date, time, and party size.",
    },
];

pub fn recommend(text: &str) -> ChatResponse {
    recommend_with(RULES, text)
}

pub fn recommend_with(rules: &[Rule], text: &str) -> ChatResponse {
    let text = text.to_lowercase();

    let mut suggestions = Vec::new();
    let mut fragments = Vec::new();
    for rule in rules.iter().filter(|r| r.matches(&text)) {
        suggestions.extend(rule.suggestions.iter().map(|s| s.to_string()));
        fragments.push(rule.fragment.trim());
    }

    let reply = fragments.join(" ");
    let reply = if reply.is_empty() {
        DEFAULT_REPLY.to_string()
    } else {
        reply
    };

    ChatResponse {
        reply,
        suggestions,
        maybe_reservation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_pairing() {
        let res = recommend("Can you suggest a wine pairing?");
        assert!(res.reply.contains("Burgundy"));
        assert!(res.reply.contains("Champagne"));
        assert_eq!(
            res.suggestions,
            vec!["Grand Cru Burgundy 2015", "Vintage Champagne Brut 2008"]
        );
        assert_eq!(res.maybe_reservation, None);
    }

    #[test]
    fn test_reserve_invites_booking() {
        let res = recommend("I'd like to reserve a table");
        assert_eq!(
            res.reply,
            "I can book a table for you. Please share date, time, and party size."
        );
        assert!(res.suggestions.is_empty());
    }

    #[test]
    fn test_booking_is_additive() {
        let res = recommend("Book a table and tell me about the WAGYU");
        assert_eq!(
            res.reply,
            "Our signature A5 Wagyu is seared over binchotan and finished with truffle jus. \
             I can book a table for you. Please share date, time, and party size."
        );
        assert_eq!(res.suggestions, vec!["A5 Miyazaki Wagyu with black truffle jus"]);
    }

    #[test]
    fn test_fragments_follow_rule_order() {
        let res = recommend("chocolate after a vegan main, with a sommelier pick");
        let wine = res.reply.find("sommelier recommends").unwrap();
        let vegan = res.reply.find("plant-forward").unwrap();
        let dessert = res.reply.find("Marquis").unwrap();
        assert!(wine < vegan && vegan < dessert);
        assert_eq!(res.suggestions.len(), 4);
        assert!(!res.reply.starts_with(' '));
        assert!(!res.reply.contains("  "));
    }

    #[test]
    fn test_no_keywords_returns_default() {
        let res = recommend("What time is it in Paris?");
        assert_eq!(res.reply, DEFAULT_REPLY);
        assert!(res.suggestions.is_empty());
    }

    #[test]
    fn test_empty_text_returns_default() {
        let res = recommend("");
        assert_eq!(res.reply, DEFAULT_REPLY);
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [Rule {
            keywords: &["oyster"],
            suggestions: &["Gillardeau No. 2"],
            fragment: "  Our oysters arrive daily from Marennes.  ",
        }];
        let res = recommend_with(&rules, "Any OYSTERS tonight?");
        assert_eq!(res.reply, "Our oysters arrive daily from Marennes.");
        assert_eq!(res.suggestions, vec!["Gillardeau No. 2"]);
    }
}
