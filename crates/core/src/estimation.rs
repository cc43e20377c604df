//! FPS forecast math for a cpu/gpu pairing.
//!
//! Price is used as a proxy for performance: the gpu's price picks a
//! resolution tier and the per-title figures are linear in component
//! price. Rough numbers for a marketing panel, not a benchmark.

use serde::Serialize;

use crate::part::Part;

/// Gpu price above which the forecast targets 4K.
pub const TIER_HIGH_PRICE: i64 = 80_000;

/// Gpu price above which the forecast targets 1440p.
pub const TIER_MID_PRICE: i64 = 40_000;

/// A single per-title forecast row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FpsEstimate {
    pub game: &'static str,
    pub resolution: &'static str,
    pub settings: &'static str,
    pub fps: i64,
}

/// Resolution tier for a gpu price: 3 (4K), 2 (1440p), or 1 (1080p).
pub fn gpu_tier(price: i64) -> u8 {
    if price > TIER_HIGH_PRICE {
        3
    } else if price > TIER_MID_PRICE {
        2
    } else {
        1
    }
}

/// Display resolution for a tier.
pub fn tier_resolution(tier: u8) -> &'static str {
    match tier {
        3 => "4K",
        2 => "1440p",
        _ => "1080p",
    }
}

/// Forecast the fixed title set for a cpu/gpu pairing.
pub fn estimate(cpu: &Part, gpu: &Part) -> Vec<FpsEstimate> {
    let tier = gpu_tier(gpu.price);
    let resolution = tier_resolution(tier);
    let gpu_price = gpu.price as f64;
    let cpu_price = cpu.price as f64;

    vec![
        FpsEstimate {
            game: "Cyberpunk 2077",
            resolution,
            settings: "Ultra / RT On",
            fps: (gpu_price / 1000.0 * if tier == 3 { 0.8 } else { 1.2 }).round() as i64,
        },
        FpsEstimate {
            game: "Modern Warfare III",
            resolution,
            settings: "Extreme",
            fps: (gpu_price / 400.0 * 0.9).round() as i64,
        },
        FpsEstimate {
            game: "Valorant",
            resolution: "1080p",
            settings: "Competitve", // sic
            fps: (cpu_price / 100.0 * 1.5).round() as i64,
        },
        FpsEstimate {
            game: "Forza Horizon 5",
            resolution,
            settings: "Extreme",
            fps: (gpu_price / 600.0 * 1.1).round() as i64,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{Compatibility, PartKind};

    fn part(kind: PartKind, name: &str, price: i64) -> Part {
        Part {
            id: price,
            name: name.to_string(),
            kind,
            brand: "Test".to_string(),
            price,
            specs: serde_json::Value::Null,
            image: None,
            compatibility: Compatibility::default(),
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(gpu_tier(185_000), 3);
        assert_eq!(gpu_tier(80_001), 3);
        assert_eq!(gpu_tier(80_000), 2);
        assert_eq!(gpu_tier(78_000), 2);
        assert_eq!(gpu_tier(40_000), 1);
        assert_eq!(gpu_tier(29_500), 1);
    }

    #[test]
    fn tier_resolutions() {
        assert_eq!(tier_resolution(3), "4K");
        assert_eq!(tier_resolution(2), "1440p");
        assert_eq!(tier_resolution(1), "1080p");
    }

    #[test]
    fn top_tier_pairing_figures() {
        let cpu = part(PartKind::Cpu, "Core i9-14900K", 54_500);
        let gpu = part(PartKind::Gpu, "RTX 4090", 185_000);
        let rows = estimate(&cpu, &gpu);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].game, "Cyberpunk 2077");
        assert_eq!(rows[0].resolution, "4K");
        assert_eq!(rows[0].fps, 148); // 185 * 0.8
        assert_eq!(rows[1].fps, 416); // 462.5 * 0.9 rounded
        assert_eq!(rows[2].resolution, "1080p");
        assert_eq!(rows[2].fps, 818); // 545 * 1.5 rounded
        assert_eq!(rows[3].fps, 339); // 308.33 * 1.1 rounded
    }

    #[test]
    fn budget_gpu_uses_the_higher_cyberpunk_factor() {
        let cpu = part(PartKind::Cpu, "Core i3-12100F", 8_500);
        let gpu = part(PartKind::Gpu, "RTX 4060", 29_500);
        let rows = estimate(&cpu, &gpu);

        assert_eq!(rows[0].resolution, "1080p");
        assert_eq!(rows[0].fps, 35); // 29.5 * 1.2 rounded
        assert_eq!(rows[2].fps, 128); // 85 * 1.5 rounded
    }

    #[test]
    fn valorant_is_cpu_bound_and_always_1080p() {
        let cpu = part(PartKind::Cpu, "Ryzen 7 7800X3D", 38_900);
        let fast_gpu = part(PartKind::Gpu, "RX 7900 XTX", 95_000);
        let slow_gpu = part(PartKind::Gpu, "RX 6600", 19_500);

        let a = estimate(&cpu, &fast_gpu);
        let b = estimate(&cpu, &slow_gpu);
        assert_eq!(a[2], b[2]);
        assert_eq!(a[2].resolution, "1080p");
    }
}
