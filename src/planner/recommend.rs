use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{ClientDirectory, ClientProfile};

/// A recommended workout plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub workout_plan_id: u64,
    pub workout_name: String,
}

/// Numeric feature vector used for client similarity.
///
/// `[age, height, weight, activity, gender, goal]`; missing age counts as 0.
pub fn encode_client_features(client: &ClientProfile) -> [f64; 6] {
    [
        client.age.unwrap_or(0) as f64,
        client.height,
        client.weight,
        client.activity_level.ordinal(),
        client.gender.ordinal(),
        client.goal.ordinal(),
    ]
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Indices of the `k` points nearest to `query`, closest first.
///
/// Equal distances keep their original order.
pub fn nearest_neighbours(points: &[[f64; 6]], query: &[f64; 6], k: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, euclidean_distance(p, query)))
        .collect();

    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().take(k).map(|(i, _)| i).collect()
}

/// Plan ids rated by a client, highest rating first.
fn plans_by_rating(directory: &ClientDirectory, client_id: u64) -> Vec<u64> {
    let mut rated: Vec<(u64, u8)> = directory
        .ratings_for(client_id)
        .map(|r| (r.workout_plan_id, r.rating))
        .collect();
    rated.sort_by(|a, b| b.1.cmp(&a.1));
    rated.into_iter().map(|(id, _)| id).collect()
}

/// Recommend workout plans rated highly by the most similar clients.
///
/// Neighbours are drawn from clients with at least one rating, other than the
/// target. Plans the target already rated are skipped.
pub fn recommend_workouts(
    directory: &ClientDirectory,
    target_id: u64,
    k: usize,
    limit: usize,
) -> Result<Vec<Recommendation>> {
    let target = directory
        .client(target_id)
        .ok_or(PlanError::ClientNotFound(target_id))?;

    let pool: Vec<&ClientProfile> = directory
        .clients
        .iter()
        .filter(|c| c.id != target_id && directory.has_ratings(c.id))
        .collect();

    if pool.is_empty() {
        debug!(target_id, "no rated clients to compare against");
        return Ok(Vec::new());
    }

    let features: Vec<[f64; 6]> = pool.iter().map(|c| encode_client_features(c)).collect();
    let query = encode_client_features(target);
    let neighbours = nearest_neighbours(&features, &query, k.min(pool.len()));

    debug!(
        target_id,
        neighbours = ?neighbours.iter().map(|&i| pool[i].id).collect::<Vec<_>>(),
        "nearest clients"
    );

    let already_rated: HashSet<u64> = directory
        .ratings_for(target_id)
        .map(|r| r.workout_plan_id)
        .collect();

    let mut seen = HashSet::new();
    let recommendations = neighbours
        .into_iter()
        .flat_map(|i| plans_by_rating(directory, pool[i].id))
        .filter(|id| !already_rated.contains(id))
        .filter(|id| seen.insert(*id))
        .take(limit)
        .map(|id| Recommendation {
            workout_plan_id: id,
            workout_name: directory.workout_name(id).unwrap_or_default().to_string(),
        })
        .collect();

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        assert!((euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_neighbours_order_and_ties() {
        let points = [
            [10.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [5.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        let query = [0.0; 6];
        assert_eq!(nearest_neighbours(&points, &query, 3), vec![1, 2, 3]);
        assert_eq!(nearest_neighbours(&points, &query, 10).len(), 4);
    }
}
