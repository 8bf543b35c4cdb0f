//! Writes a deterministic sample launch-records CSV so the dashboard can be
//! used offline:  `cargo run -- sample_launches.csv`

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

    // Booster categories with a base success probability; heavier payloads
    // pull the probability down.
    let boosters: [(&str, f64); 5] = [
        ("v1.0", 0.40),
        ("v1.1", 0.55),
        ("FT", 0.75),
        ("B4", 0.85),
        ("B5", 0.95),
    ];

    let output_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "Payload Mass (kg)",
            "class",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    let mut flight = 1u32;
    let mut successes = 0u32;

    for (booster, base_p) in &boosters {
        for site in &sites {
            for _ in 0..3 {
                let payload = ((500.0 + rng.next_f64() * 9000.0) / 10.0).round() * 10.0;
                let p_success = base_p - 0.25 * (payload / 10_000.0);
                let class = if rng.next_f64() < p_success { 1 } else { 0 };
                successes += class;

                writer
                    .write_record([
                        flight.to_string(),
                        site.to_string(),
                        format!("{payload:.1}"),
                        class.to_string(),
                        booster.to_string(),
                    ])
                    .expect("Failed to write row");
                flight += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} launch records ({} successes) to {output_path}",
        flight - 1,
        successes
    );
}
