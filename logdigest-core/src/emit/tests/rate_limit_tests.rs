use crate::emit::RateLimiter;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::Instant;

const WINDOW: Duration = Duration::from_secs(1);

fn assert_sliding_window(starts: &[Duration], limit: usize) {
    for (i, first) in starts.iter().enumerate() {
        let in_window = starts[i..]
            .iter()
            .filter(|t| **t - *first < WINDOW)
            .count();
        assert!(
            in_window <= limit,
            "{in_window} starts within 1s of {first:?}: {starts:?}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn limiter_allows_at_most_limit_per_window() {
    // Arrange
    let mut limiter = RateLimiter::new(2, WINDOW);
    let origin = Instant::now();
    let mut starts = Vec::new();

    // Act
    for _ in 0..5 {
        limiter.acquire().await;
        starts.push(Instant::now() - origin);
    }

    // Assert
    assert_sliding_window(&starts, 2);
    assert_eq!(
        starts,
        vec![
            Duration::ZERO,
            Duration::ZERO,
            Duration::from_secs(1),
            Duration::from_secs(1),
            Duration::from_secs(2),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn limiter_does_not_wait_below_limit() {
    let mut limiter = RateLimiter::new(3, WINDOW);
    let origin = Instant::now();

    for _ in 0..3 {
        limiter.acquire().await;
    }

    assert_eq!(Instant::now() - origin, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn limiter_frees_slots_as_starts_age_out() {
    // Arrange
    let mut limiter = RateLimiter::new(2, WINDOW);
    let origin = Instant::now();

    limiter.acquire().await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    limiter.acquire().await;

    // Act: the first start leaves the window at 1.0s, the second at 1.6s.
    limiter.acquire().await;
    let third = Instant::now() - origin;
    limiter.acquire().await;
    let fourth = Instant::now() - origin;

    // Assert
    assert_eq!(third, Duration::from_secs(1));
    assert_eq!(fourth, Duration::from_millis(1600));
}

#[test]
fn zero_limit_is_clamped_to_one() {
    let limiter = RateLimiter::new(0, WINDOW);

    assert_eq!(limiter.limit(), 1);
    assert_eq!(limiter.window(), WINDOW);
}
