use std::collections::HashMap;
use once_cell::sync::Lazy;
use crate::config::constants::RESPONDENT_COUNT;
use crate::structs::named_count::NamedCount;
use crate::structs::rating_score::RatingScore;
use crate::structs::survey_dataset::SurveyDataset;

/// Results of the dealership partner survey on marketing materials.
pub static SURVEY_DATA: Lazy<SurveyDataset> = Lazy::new(|| SurveyDataset {
    respondents: RESPONDENT_COUNT,
    sales_activities: vec![
        NamedCount::new("Getting them into the showroom", 10),
        NamedCount::new("Following up after initial contact", 8),
        NamedCount::new("Booking test rides", 8),
        NamedCount::new("Getting attention with marketing", 4),
        NamedCount::new("Explaining new model features", 3),
    ],
    content_types: vec![
        NamedCount::new("Video walkarounds", 10),
        NamedCount::new("Short social video clips", 8),
        NamedCount::new("Pre-written email templates", 7),
        NamedCount::new("Social posts", 7),
        NamedCount::new("Other", 6),
        NamedCount::new("Posters/POS materials", 5),
        NamedCount::new("Landing page templates", 3),
        NamedCount::new("Event invite templates", 3),
    ],
    communication_channels: vec![
        NamedCount::new("Email", 15),
        NamedCount::new("Phone", 15),
        NamedCount::new("Events", 12),
        NamedCount::new("Facebook", 11),
        NamedCount::new("Instagram", 8),
        NamedCount::new("In-store/POS", 8),
        NamedCount::new("Other", 4),
        NamedCount::new("WhatsApp", 3),
    ],
    marketing_types: vec![
        NamedCount::new("Mostly organic", 9),
        NamedCount::new("A balanced mix", 9),
        NamedCount::new("Mostly paid", 3),
    ],
    content_issues: vec![
        NamedCount::new("Too much editing needed", 10),
        NamedCount::new("Doesn't reflect how we sell locally", 7),
        NamedCount::new("Not relevant to local audience", 6),
        NamedCount::new("Other issues", 5),
        NamedCount::new("Wrong format", 5),
        NamedCount::new("Needs translation", 1),
    ],
    content_creation_teams: vec![
        NamedCount::new("In-house team", 16),
        NamedCount::new("Both internal/external", 2),
        NamedCount::new("Other", 3),
    ],
    ratings: vec![
        RatingScore::new("Quality of materials", 3.4),
        RatingScore::new("Quantity of materials", 2.4),
        RatingScore::new("Relevance of materials", 3.5),
        RatingScore::new("Local adaptability", 2.4),
        RatingScore::new("Usefulness of templates", 3.9),
        RatingScore::new("Ease of use", 4.5),
        RatingScore::new("Overall satisfaction", 4.7),
    ],
    ratings_by_value: HashMap::from([
        ("Quality of materials".to_string(), [1, 1, 8, 7, 2, 0]),
        ("Quantity of materials".to_string(), [6, 5, 4, 2, 2, 0]),
        ("Relevance of materials".to_string(), [2, 3, 3, 6, 5, 0]),
        ("Local adaptability".to_string(), [7, 2, 2, 0, 1, 2]),
        ("Usefulness of templates".to_string(), [1, 3, 4, 1, 4, 4]),
        ("Ease of use".to_string(), [0, 0, 4, 5, 6, 4]),
        ("Overall satisfaction".to_string(), [0, 0, 3, 5, 6, 5]),
    ]),
});
