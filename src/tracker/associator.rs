//! Greedy online track association.

use crate::constants::{MIN_TRACK_LEN, NO_TRACK_ID, POLY_WINDOW};
use crate::error::{Error, Result};
use crate::tracker::predict::Predictor;
use crate::tracker::types::{Click, TrackingParams, TrackingResult};
use tracing::{debug, trace};

/// Associate a time-ordered click sequence into TDOA tracks.
///
/// Makes a single forward pass: each accepted click is appended to the
/// open track whose predicted TDOA it matches best (strictly below
/// `diff_max`), or opens a new track when no open track qualifies. Ties
/// in the minimum difference go to the earliest-created track. After the
/// pass, tracks with fewer than two members are dropped and their clicks
/// reported as unassigned.
///
/// The result is deterministic for a given input and parameter set.
/// Tracks only grow and never close, so the scan is O(N·M) in the number
/// of accepted clicks N and open tracks M; long streams with many
/// short-lived sources pay for every track ever opened.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for out-of-range thresholds and
/// [`Error::UnsortedClicks`] when the input is not sorted by time.
pub fn associate_tracks(clicks: &[Click], params: &TrackingParams) -> Result<TrackingResult> {
    params.validate()?;
    validate_sorted(clicks)?;

    let predictor = Predictor::from_flag(params.polynomial_expectation);
    let mut tracks: Vec<Vec<usize>> = Vec::new();

    for (i, click) in clicks.iter().enumerate() {
        if click.amplitude < params.amp_thres {
            continue;
        }

        // Best candidate is an explicit Option: track index 0 is as valid
        // an assignment target as any other.
        let mut best: Option<(usize, f64)> = None;

        for (j, track) in tracks.iter().enumerate() {
            let last_idx = match track.last() {
                Some(&idx) => idx,
                None => continue,
            };
            if click.time - clicks[last_idx].time >= params.click_interval_max {
                continue;
            }

            let window: Vec<(f64, f64)> = track[track.len().saturating_sub(POLY_WINDOW)..]
                .iter()
                .map(|&k| (clicks[k].time, clicks[k].tdoa))
                .collect();
            let expected = predictor.expected_tdoa(&window, click.time);
            let diff = (expected - click.tdoa).abs();

            if diff < params.diff_max && best.is_none_or(|(_, d)| diff < d) {
                best = Some((j, diff));
            }
        }

        match best {
            Some((j, diff)) => {
                trace!("click {i} joins track {j} (diff {diff:.3e})");
                tracks[j].push(i);
            }
            None => {
                trace!("click {i} opens track {}", tracks.len());
                tracks.push(vec![i]);
            }
        }
    }

    let opened = tracks.len();
    tracks.retain(|t| t.len() >= MIN_TRACK_LEN);
    debug!(
        "kept {} of {} opened track(s) after singleton filter",
        tracks.len(),
        opened
    );

    let assignment = build_assignment(clicks.len(), &tracks);
    Ok(TrackingResult { tracks, assignment })
}

/// Reject click sequences not sorted by time.
///
/// The greedy pass assumes monotonically non-decreasing times; rather
/// than leaving unsorted input as undefined behavior, it is rejected
/// with the index of the first offending click.
fn validate_sorted(clicks: &[Click]) -> Result<()> {
    for (i, pair) in clicks.windows(2).enumerate() {
        if pair[1].time < pair[0].time {
            return Err(Error::UnsortedClicks { index: i + 1 });
        }
    }
    Ok(())
}

/// Map every click index to the position of its track in the filtered
/// list, or `NO_TRACK_ID` when no track contains it.
fn build_assignment(click_count: usize, tracks: &[Vec<usize>]) -> Vec<i64> {
    let mut assignment = vec![NO_TRACK_ID; click_count];
    for (track_id, track) in tracks.iter().enumerate() {
        for &click_idx in track {
            #[allow(clippy::cast_possible_wrap)]
            {
                assignment[click_idx] = track_id as i64;
            }
        }
    }
    assignment
}
