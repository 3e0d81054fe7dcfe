use shared::errors::Error;
use shared::types::{Amount, AuctionConfig, Round, Timestamp};

/// Validate the parameters of a new round against the config, the current
/// time and the most recently created round.
///
/// Overlap is only checked against `latest`, never against older rounds.
pub fn validate_new_round(
    config: &AuctionConfig,
    now: Timestamp,
    min_target: Amount,
    max_target: Amount,
    start_time: Timestamp,
    end_time: Timestamp,
    latest: Option<&Round>,
) -> Result<(), Error> {
    if end_time <= start_time {
        return Err(Error::InvalidTiming);
    }
    if end_time - start_time < config.min_round_length {
        return Err(Error::RoundTooShort);
    }
    if start_time <= now {
        return Err(Error::StartInPast);
    }
    if start_time - now < config.min_round_lead_time {
        return Err(Error::LeadTimeTooShort);
    }
    if max_target <= min_target {
        return Err(Error::InvalidTargets);
    }
    // Keeps the organizer fee of any successful round above zero
    if min_target <= config.organizer_fee_divisor {
        return Err(Error::InvalidMinimum);
    }
    if let Some(latest) = latest {
        if start_time < latest.end_time {
            return Err(Error::OverlappingRound);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const NOW: Timestamp = 10_000;

    fn config() -> AuctionConfig {
        AuctionConfig {
            min_round_length: 100,
            min_round_lead_time: 10,
            organizer_fee_divisor: 20,
            max_fee_price: 1_000,
            max_contribution_per_call: 1_000_000,
        }
    }

    fn round_ending_at(end_time: Timestamp) -> Round {
        Round {
            index: 0,
            min_target: 1_000,
            max_target: 100_000,
            start_time: end_time - 100,
            end_time,
            raised_amount: 0,
            finished: false,
            success: false,
            proceeds_withdrawn: false,
        }
    }

    fn check(min: Amount, max: Amount, start: Timestamp, end: Timestamp) -> Result<(), Error> {
        validate_new_round(&config(), NOW, min, max, start, end, None)
    }

    #[test]
    fn test_accepts_well_formed_round() {
        assert_eq!(check(1_000, 100_000, NOW + 10, NOW + 110), Ok(()));
    }

    #[test]
    fn test_rejects_bad_timing() {
        assert_eq!(check(1_000, 100_000, NOW + 50, NOW + 50), Err(Error::InvalidTiming));
        assert_eq!(check(1_000, 100_000, NOW + 50, NOW + 40), Err(Error::InvalidTiming));
        assert_eq!(check(1_000, 100_000, NOW + 50, NOW + 149), Err(Error::RoundTooShort));
        assert_eq!(check(1_000, 100_000, NOW, NOW + 100), Err(Error::StartInPast));
        assert_eq!(check(1_000, 100_000, NOW + 9, NOW + 109), Err(Error::LeadTimeTooShort));
    }

    #[test]
    fn test_rejects_bad_targets() {
        assert_eq!(check(1_000, 1_000, NOW + 10, NOW + 110), Err(Error::InvalidTargets));
        assert_eq!(check(1_000, 999, NOW + 10, NOW + 110), Err(Error::InvalidTargets));
        assert_eq!(check(20, 1_000, NOW + 10, NOW + 110), Err(Error::InvalidMinimum));
        assert_eq!(check(21, 1_000, NOW + 10, NOW + 110), Ok(()));
    }

    #[test]
    fn test_timing_is_checked_before_targets() {
        assert_eq!(check(1_000, 10, NOW, NOW), Err(Error::InvalidTiming));
    }

    #[test]
    fn test_overlap_checked_against_latest_round() {
        let latest = round_ending_at(NOW + 500);
        let overlapping =
            validate_new_round(&config(), NOW, 1_000, 100_000, NOW + 499, NOW + 600, Some(&latest));
        assert_eq!(overlapping, Err(Error::OverlappingRound));

        let adjacent =
            validate_new_round(&config(), NOW, 1_000, 100_000, NOW + 500, NOW + 600, Some(&latest));
        assert_eq!(adjacent, Ok(()));
    }
}
