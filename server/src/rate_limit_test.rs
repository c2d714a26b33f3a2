use super::*;

fn limiter(per_email: usize, global: usize) -> RateLimiter {
    RateLimiter::with_limits(SignInLimits { per_email, global, window_secs: 60 })
}

#[test]
fn per_email_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at("a@b.co", now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("a@b.co", now),
        Err(RateLimitError::PerEmailExceeded { limit: 3, window_secs: 60 })
    ));
}

#[test]
fn per_email_limits_are_independent() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    assert!(rl.check_and_record_at("a@b.co", now).is_ok());
    assert!(rl.check_and_record_at("c@d.co", now).is_ok());
    assert!(rl.check_and_record_at("a@b.co", now).is_err());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(10, 4);
    let now = Instant::now();

    for i in 0..4 {
        let email = format!("user{i}@example.com");
        assert!(rl.check_and_record_at(&email, now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("late@example.com", now),
        Err(RateLimitError::GlobalExceeded { limit: 4, .. })
    ));
}

#[test]
fn window_expiry_frees_capacity() {
    let rl = limiter(1, 100);
    let start = Instant::now();

    assert!(rl.check_and_record_at("a@b.co", start).is_ok());
    assert!(rl.check_and_record_at("a@b.co", start + Duration::from_secs(30)).is_err());
    assert!(rl.check_and_record_at("a@b.co", start + Duration::from_secs(61)).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 2);
    let now = Instant::now();

    assert!(rl.check_and_record_at("a@b.co", now).is_ok());
    for _ in 0..5 {
        assert!(rl.check_and_record_at("a@b.co", now).is_err());
    }
    // Only one slot of the global budget is used.
    assert!(rl.check_and_record_at("c@d.co", now).is_ok());
}

#[test]
fn idle_emails_are_forgotten() {
    let rl = limiter(5, 100);
    let start = Instant::now();

    assert!(rl.check_and_record_at("a@b.co", start).is_ok());
    assert_eq!(rl.tracked_emails(), 1);

    let later = start + Duration::from_secs(120);
    assert!(rl.check_and_record_at("c@d.co", later).is_ok());
    assert_eq!(rl.tracked_emails(), 1);
}

#[test]
fn error_messages_name_limit() {
    let err = RateLimitError::PerEmailExceeded { limit: 5, window_secs: 900 };
    assert_eq!(err.to_string(), "per-email rate limit exceeded (max 5 requests/900s)");
}
