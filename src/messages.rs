//! Pure formatting of weather fields into the displayed sentences

use crate::state::TempUnit;

/// Shown when the user submits an empty or whitespace-only query.
pub const EMPTY_INPUT_MSG: &str = "Please enter a valid location.";

/// Shown for every failed lookup, whatever the underlying cause.
pub const LOOKUP_FAILED_MSG: &str = "City not found. Please try again.";

/// Advice line keyed on the temperature value.
///
/// Celsius readings are bucketed into five ranges with fixed templates;
/// any other unit renders as the bare `{value}°{unit}` string.
pub fn temperature_message(value: f64, unit: TempUnit) -> String {
    match unit {
        TempUnit::Celsius => {
            if value < 0.0 {
                format!("It's freezing at {value}°C! Bundle up!")
            } else if value < 10.0 {
                format!("It's quite cold at {value}°C. Wear warm clothes.")
            } else if value < 20.0 {
                format!("The temperature is {value}°C. Comfortable for a light jacket.")
            } else if value < 30.0 {
                format!("It's a pleasant {value}°C. Enjoy the nice weather!")
            } else {
                format!("It's hot at {value}°C. Stay hydrated!")
            }
        }
        other => format!("{value}°{}", other.symbol()),
    }
}

/// Advice line keyed on the provider's condition text.
///
/// The table is closed; anything the provider reports outside it is
/// echoed back unchanged, case preserved.
pub fn condition_message(condition: &str) -> String {
    match condition.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!".to_string(),
        "partly cloudy" => "Expect some clouds and sunshine.".to_string(),
        "cloudy" => "It's cloudy today.".to_string(),
        "overcast" => "The sky is overcast.".to_string(),
        "rain" => "Don't forget your umbrella! It's raining.".to_string(),
        "thunderstorm" => "Thunderstorms are expected today.".to_string(),
        "snow" => "Bundle up! It's snowing.".to_string(),
        "mist" => "It's misty outside.".to_string(),
        "fog" => "Be careful, there's fog outside.".to_string(),
        _ => condition.to_string(),
    }
}

/// Headline combining the location with a time-of-day phrase.
///
/// The wall-clock hour is injected by the caller so the function stays
/// deterministic under test.
pub fn location_message(location: &str, hour: u32) -> String {
    if (5..12).contains(&hour) {
        format!("{location} in morning.")
    } else {
        format!("{location} at night.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_temperature_buckets() {
        assert_eq!(
            temperature_message(-5.0, TempUnit::Celsius),
            "It's freezing at -5°C! Bundle up!"
        );
        assert_eq!(
            temperature_message(4.5, TempUnit::Celsius),
            "It's quite cold at 4.5°C. Wear warm clothes."
        );
        assert_eq!(
            temperature_message(15.0, TempUnit::Celsius),
            "The temperature is 15°C. Comfortable for a light jacket."
        );
        assert_eq!(
            temperature_message(22.0, TempUnit::Celsius),
            "It's a pleasant 22°C. Enjoy the nice weather!"
        );
        assert_eq!(
            temperature_message(30.0, TempUnit::Celsius),
            "It's hot at 30°C. Stay hydrated!"
        );
    }

    #[test]
    fn test_temperature_bucket_edges() {
        // Buckets are inclusive-exclusive: 0 is cold, not freezing, etc.
        assert!(temperature_message(-0.1, TempUnit::Celsius).contains("freezing"));
        assert!(temperature_message(0.0, TempUnit::Celsius).contains("quite cold"));
        assert!(temperature_message(10.0, TempUnit::Celsius).contains("light jacket"));
        assert!(temperature_message(19.9, TempUnit::Celsius).contains("light jacket"));
        assert!(temperature_message(20.0, TempUnit::Celsius).contains("pleasant"));
        assert!(temperature_message(29.9, TempUnit::Celsius).contains("pleasant"));
    }

    #[test]
    fn test_temperature_non_celsius_is_bare_value() {
        assert_eq!(temperature_message(15.0, TempUnit::Fahrenheit), "15°F");
        assert_eq!(temperature_message(72.5, TempUnit::Fahrenheit), "72.5°F");
    }

    #[test]
    fn test_condition_lookup_is_case_insensitive() {
        assert_eq!(condition_message("SUNNY"), "It's a beautiful sunny day!");
        assert_eq!(condition_message("sunny"), "It's a beautiful sunny day!");
        assert_eq!(condition_message("Partly Cloudy"), "Expect some clouds and sunshine.");
        assert_eq!(condition_message("fog"), "Be careful, there's fog outside.");
    }

    #[test]
    fn test_condition_unknown_passthrough() {
        assert_eq!(condition_message("Breezy"), "Breezy");
        assert_eq!(condition_message("Light drizzle"), "Light drizzle");
    }

    #[test]
    fn test_location_morning_window() {
        assert_eq!(location_message("Paris", 5), "Paris in morning.");
        assert_eq!(location_message("Paris", 11), "Paris in morning.");
        assert_eq!(location_message("Paris", 4), "Paris at night.");
        assert_eq!(location_message("Paris", 12), "Paris at night.");
        assert_eq!(location_message("Paris", 23), "Paris at night.");
    }
}
