//! Decorative background stars.
//!
//! The field is reproducible: the same seed id and star count always give
//! the same points, so re-renders of an unchanged graph do not flicker.

use serde::{Deserialize, Serialize};
use starmap_core::GraphNode;

pub const DEFAULT_STAR_COUNT: usize = 200;

/// Seed used when there is no node to derive one from.
pub const DEFAULT_SEED_ID: &str = "starmap";

/// Stars are scattered over a cube of this edge length centered on the origin.
const FIELD_EXTENT: i64 = 1000;
const BRIGHTNESS_STEPS: i64 = 101;

const X_PRIME: i64 = 7919;
const Y_PRIME: i64 = 7927;
const Z_PRIME: i64 = 7933;
const BRIGHTNESS_PRIME: i64 = 7937;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// In `[0, 1]`.
    pub brightness: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    pub seed: i32,
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Rolling `hash * 31 + code_unit` over the UTF-16 code units of `id`, with
/// 32-bit wraparound.
pub fn seed_hash(id: &str) -> i32 {
    id.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

fn scatter(seed: i32, index: usize, prime: i64, modulus: i64) -> i64 {
    i64::from(seed)
        .wrapping_add((index as i64).wrapping_mul(prime))
        .rem_euclid(modulus)
}

fn star_at(seed: i32, index: usize) -> Star {
    let half = (FIELD_EXTENT / 2) as f64;
    Star {
        x: scatter(seed, index, X_PRIME, FIELD_EXTENT) as f64 - half,
        y: scatter(seed, index, Y_PRIME, FIELD_EXTENT) as f64 - half,
        z: scatter(seed, index, Z_PRIME, FIELD_EXTENT) as f64 - half,
        brightness: scatter(seed, index, BRIGHTNESS_PRIME, BRIGHTNESS_STEPS) as f64
            / (BRIGHTNESS_STEPS - 1) as f64,
    }
}

/// Generate `count` background stars seeded from the first node's id.
pub fn generate_starfield(nodes: &[GraphNode], count: usize) -> Starfield {
    let seed_id = nodes.first().map_or(DEFAULT_SEED_ID, |node| node.id.as_str());
    let seed = seed_hash(seed_id);

    Starfield {
        seed,
        stars: (0..count).map(|index| star_at(seed, index)).collect(),
    }
}
