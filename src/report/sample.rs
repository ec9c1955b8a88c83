use super::model::{FeatureMap, FeatureValue, Report};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        low + (high - low) * unit
    }
}

/// Layers of the synthetic model, in forward order.
/// `true` marks layers with weights (and therefore per-channel statistics).
const LAYERS: [(&str, bool); 7] = [
    ("block1.conv1", true),
    ("block1.relu", false),
    ("block1.conv2", true),
    ("block2.conv1", true),
    ("block2.relu", false),
    ("block2.linear", true),
    ("fc", true),
];

/// Number of channels of every weighted layer.
pub const SAMPLE_CHANNELS: usize = 4;

/// Build a deterministic report shaped like the output of an observer-based
/// calibration run: global activation ranges for every layer, per-channel
/// ranges plus a recommendation for weighted layers.
pub fn sample_report(seed: u64) -> Report {
    let mut rng = SimpleRng::new(seed);

    LAYERS
        .iter()
        .map(|&(fqn, weighted)| {
            let mut features = FeatureMap::new();
            let global_min = rng.uniform(-4.0, 0.0);
            let global_max = rng.uniform(0.5, 6.0);
            features.insert("global_min".into(), FeatureValue::Tensor(global_min));
            features.insert("global_max".into(), FeatureValue::Tensor(global_max));

            if weighted {
                let mins: Vec<f64> = (0..SAMPLE_CHANNELS)
                    .map(|_| rng.uniform(global_min, 0.0))
                    .collect();
                let maxs: Vec<f64> = (0..SAMPLE_CHANNELS)
                    .map(|_| rng.uniform(0.0, global_max))
                    .collect();
                let outlier_ratio = rng.uniform(0.0, 0.2);

                features.insert("per_channel_min".into(), FeatureValue::Channels(mins));
                features.insert("per_channel_max".into(), FeatureValue::Channels(maxs));
                features.insert("outlier_ratio".into(), FeatureValue::Number(outlier_ratio));
                features.insert(
                    "dynamic_recommended".into(),
                    FeatureValue::Bool(outlier_ratio > 0.1),
                );
                features.insert(
                    "recommendation".into(),
                    FeatureValue::Text(if outlier_ratio > 0.1 {
                        "use dynamic quantization".into()
                    } else {
                        "static quantization is fine".into()
                    }),
                );
            }
            (fqn.to_string(), features)
        })
        .collect()
}
