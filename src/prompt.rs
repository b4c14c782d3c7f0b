//! Travel-planning prompt generation.
//!
//! Builds the itinerary-planning prompt the assistant sends for a region:
//! user preferences, candidate attractions and restaurants, and the weather
//! outlook, ending with a request for a JSON itinerary. The diagnostic suites
//! generate the prompt from fixture data and size it against the token budget.

use std::fmt::Write;

/// Token budget above which a generated prompt is flagged as oversized.
pub const PROMPT_TOKEN_BUDGET: usize = 3000;

/// A candidate attraction for the itinerary.
#[derive(Debug, Clone)]
pub struct Attraction {
    pub name: String,
    pub description: String,
}

/// A recommended restaurant.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub name: String,
    pub description: String,
}

/// One day of the weather outlook.
#[derive(Debug, Clone)]
pub struct WeatherDay {
    pub date: String,
    pub condition: String,
    pub high_celsius: i32,
}

/// Region data feeding the planning prompt.
#[derive(Debug, Clone)]
pub struct RegionData {
    pub region_name: String,
    pub attractions: Vec<Attraction>,
    pub restaurants: Vec<Restaurant>,
    pub weather: Vec<WeatherDay>,
}

/// User preferences for the trip.
#[derive(Debug, Clone)]
pub struct UserPreferences {
    pub budget_level: String,
    pub travel_styles: Vec<String>,
    pub group_size: u32,
}

/// Renders the planning prompt for `days` days in the region.
pub fn planning_prompt(region: &RegionData, prefs: &UserPreferences, days: u32) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Create a detailed {}-day travel plan for {}.",
        days, region.region_name
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "User preferences:");
    let _ = writeln!(prompt, "- Budget level: {}", prefs.budget_level);
    let _ = writeln!(prompt, "- Travel style: {}", prefs.travel_styles.join(", "));
    let _ = writeln!(prompt, "- Group size: {} people", prefs.group_size);
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Candidate attractions:");
    for attraction in &region.attractions {
        let _ = writeln!(prompt, "- {}: {}", attraction.name, attraction.description);
    }
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Recommended restaurants:");
    for restaurant in &region.restaurants {
        let _ = writeln!(prompt, "- {}: {}", restaurant.name, restaurant.description);
    }
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Weather outlook:");
    for day in &region.weather {
        let _ = writeln!(
            prompt,
            "- {}: {}, {}\u{b0}C",
            day.date, day.condition, day.high_celsius
        );
    }
    let _ = writeln!(prompt);

    let _ = writeln!(
        prompt,
        "Produce the plan as JSON with a daily itinerary covering attractions, \
         meals, lodging suggestions, and transport between stops."
    );

    prompt
}

/// Fixture region used by the prompt-generation check: Urumqi with two
/// attractions, one restaurant, and a one-day outlook.
pub fn sample_region() -> RegionData {
    RegionData {
        region_name: "Urumqi".to_string(),
        attractions: vec![
            Attraction {
                name: "Tianshan Tianchi".to_string(),
                description: "Alpine lake scenery in the Tianshan range".to_string(),
            },
            Attraction {
                name: "Xinjiang Regional Museum".to_string(),
                description: "History and culture of the region".to_string(),
            },
        ],
        restaurants: vec![Restaurant {
            name: "Dapanji House".to_string(),
            description: "Signature Xinjiang big-plate chicken".to_string(),
        }],
        weather: vec![WeatherDay {
            date: "2024-06-01".to_string(),
            condition: "sunny".to_string(),
            high_celsius: 28,
        }],
    }
}

/// Fixture preferences used by the prompt-generation check.
pub fn sample_preferences() -> UserPreferences {
    UserPreferences {
        budget_level: "mid".to_string(),
        travel_styles: vec!["culture".to_string(), "nature".to_string()],
        group_size: 2,
    }
}
