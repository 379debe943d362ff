//! Procedural patrol route generation
//!
//! Точки на окружности `radius` вокруг anchor, попарная дистанция
//! ≥ `min_distance`. На каждую точку максимум [`MAX_PLACEMENT_ATTEMPTS`]
//! кандидатов; если ограничение не выполнено — берём кандидата с наибольшим
//! зазором (best effort). Генерация всегда завершается и возвращает ровно
//! `count` точек.

use bevy::prelude::*;
use rand::Rng;

use crate::components::distance;

pub const MAX_PLACEMENT_ATTEMPTS: usize = 20;

/// Сгенерировать `count` waypoints вокруг `anchor`
pub fn generate_patrol_points<R: Rng>(
    rng: &mut R,
    anchor: Vec2,
    count: usize,
    radius: f32,
    min_distance: f32,
) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut best = random_point_on_circle(rng, anchor, radius);
        let mut best_clearance = clearance(best, &points);

        let mut attempts = 1;
        while best_clearance < min_distance && attempts < MAX_PLACEMENT_ATTEMPTS {
            let candidate = random_point_on_circle(rng, anchor, radius);
            let candidate_clearance = clearance(candidate, &points);
            if candidate_clearance > best_clearance {
                best = candidate;
                best_clearance = candidate_clearance;
            }
            attempts += 1;
        }

        points.push(best);
    }

    points
}

/// Минимальная дистанция до уже размещённых точек (∞ если точек нет)
fn clearance(candidate: Vec2, points: &[Vec2]) -> f32 {
    points
        .iter()
        .map(|p| distance(candidate, *p))
        .fold(f32::INFINITY, f32::min)
}

fn random_point_on_circle<R: Rng>(rng: &mut R, anchor: Vec2, radius: f32) -> Vec2 {
    let angle = rng.gen::<f32>() * std::f32::consts::TAU;
    anchor + Vec2::new(angle.cos(), angle.sin()) * radius
}
