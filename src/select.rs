use crate::{histogram::ColorEntry, DIVERSITY_FLOOR, DIVERSITY_WEIGHT, MAX_RGB_DISTANCE};

/// Order entries by dominance and pick the output set.
///
/// The first `dominant_slots` picks are the top entries by score, in score
/// order, so the image's main colors can never be displaced by the diversity
/// pass. Remaining slots are filled greedily: each round takes the candidate
/// with the best score weighted by its distance to everything already picked,
/// which favors a distinct mid-weight color over a near-duplicate of a pick.
pub(crate) fn select_diverse(
    mut entries: Vec<ColorEntry>,
    max_colors: usize,
    dominant_slots: usize,
) -> Vec<ColorEntry> {
    // stable sort keeps first-seen bucket order among equal scores
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));

    let reserved = dominant_slots.min(max_colors).min(entries.len());
    let mut remaining = entries.split_off(reserved);
    let mut selected = entries;

    while selected.len() < max_colors && !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_value = f32::NEG_INFINITY;

        for (candidate_index, candidate) in remaining.iter().enumerate() {
            let value = candidate.score * diversity_bonus(candidate, &selected);

            // strict comparison: the first candidate to reach a value keeps it
            if value > best_value {
                best_value = value;
                best_index = candidate_index;
            }
        }

        selected.push(remaining.remove(best_index));
    }

    selected
}

/// Diminishing-returns multiplier in `[DIVERSITY_FLOOR, 1.0]`: a candidate
/// close to an already-selected color earns little more than the floor, one
/// far from all of them earns nearly its full score.
fn diversity_bonus(candidate: &ColorEntry, selected: &[ColorEntry]) -> f32 {
    let min_distance = selected
        .iter()
        .map(|picked| normalized_distance(candidate, picked))
        .fold(f32::INFINITY, f32::min);

    DIVERSITY_FLOOR + DIVERSITY_WEIGHT * min_distance
}

// euclidean RGB distance scaled by the diagonal of the color cube, capped at 1
fn normalized_distance(a: &ColorEntry, b: &ColorEntry) -> f32 {
    let delta_red = a.red - b.red;
    let delta_green = a.green - b.green;
    let delta_blue = a.blue - b.blue;
    let distance = (delta_red * delta_red + delta_green * delta_green + delta_blue * delta_blue).sqrt();

    (distance / MAX_RGB_DISTANCE).min(1.0)
}
