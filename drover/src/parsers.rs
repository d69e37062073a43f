use jiff::{SignedDuration, Span, SpanRelativeTo};

pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    let duration = if let Ok(duration) = input.parse::<SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<i64>() {
        SignedDuration::from_secs(seconds)
    } else {
        return Err(String::from("Invalid duration"));
    };

    if duration.is_negative() {
        return Err(String::from("Duration must not be negative"));
    }

    Ok(duration)
}
