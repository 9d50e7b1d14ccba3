//! Community feed content: success stories and upcoming campus events.
//!
//! Static content for the prototype; a later iteration would fetch
//! these from the backend like the item catalog.

/// A member success story shown on the community page.
#[derive(Clone, Debug, PartialEq)]
pub struct SuccessStory {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// An upcoming campus event.
#[derive(Clone, Debug, PartialEq)]
pub struct CommunityEvent {
    pub id: &'static str,
    /// Display date, "<day> <month>" (e.g. "14 Sep").
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl CommunityEvent {
    /// Day-of-month part of the date block.
    pub fn day(&self) -> &str {
        self.date.split(' ').next().unwrap_or(self.date)
    }

    /// Month part of the date block.
    pub fn month(&self) -> &str {
        self.date.split(' ').nth(1).unwrap_or("")
    }
}

/// Seeded stories for the prototype feed.
pub fn success_stories() -> Vec<SuccessStory> {
    vec![
        SuccessStory {
            name: "Sarah",
            role: "Law Student",
            quote: "I traded my old Java textbooks for a graphing calculator. I saved RM200 \
                    and kept the books out of the dumpster!",
        },
        SuccessStory {
            name: "Team 3 Occ 7",
            role: "Residential College",
            quote: "Our recent donation drive collected over 50kg of clothes. That's a massive \
                    reduction in our campus carbon footprint.",
        },
        SuccessStory {
            name: "Lisa",
            role: "Biomedical Science",
            quote: "I found a second-hand lab coat in perfect condition on EcoSwap. It was \
                    free, and I met a great senior!",
        },
    ]
}

/// Seeded upcoming events for the prototype feed.
pub fn upcoming_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: "swap-fest",
            date: "14 Sep",
            time: "10:00 - 16:00",
            location: "Student Union Lawn",
            title: "Campus Swap Fest",
            description: "Bring up to five items to the student union lawn and swap them \
                          on the spot. Leftovers go to the donation drive.",
        },
        CommunityEvent {
            id: "repair-cafe",
            date: "27 Sep",
            time: "13:00 - 17:00",
            location: "Engineering Block, Lab 2",
            title: "Repair Café: Electronics Edition",
            description: "Engineering society volunteers fix small appliances and gadgets \
                          before you give up on them.",
        },
    ]
}

/// Look up an event for the detail page.
pub fn event_by_id(id: &str) -> Option<CommunityEvent> {
    upcoming_events().into_iter().find(|event| event.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_date_block_parts() {
        let event = CommunityEvent {
            id: "x",
            date: "14 Sep",
            time: "",
            location: "",
            title: "",
            description: "",
        };
        assert_eq!(event.day(), "14");
        assert_eq!(event.month(), "Sep");
    }

    #[test]
    fn test_event_lookup() {
        assert_eq!(
            event_by_id("swap-fest").map(|e| e.title),
            Some("Campus Swap Fest")
        );
        assert_eq!(event_by_id("bake-sale"), None);
    }
}
