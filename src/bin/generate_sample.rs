use anyhow::{Context, Result};

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Diya", "Ishaan", "Meera", "Rohan", "Sana", "Kabir", "Anika", "Vihaan", "Priya",
    "Arjun", "Nisha", "Dev", "Tara", "Raghav", "Zoya",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Reddy", "Khan", "Iyer", "Das", "Mehta", "Nair", "Singh", "Bose",
];

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool[(self.next_u64() as usize) % pool.len()]
    }
}

fn whole(v: f64) -> f64 {
    v.max(0.0).round()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(7);

    let output_path = "student_fees.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record([
        "Name",
        "Academic Fees Paid",
        "Academic Due Fees",
        "Academic Total Fees",
        "Transportation Fees Paid",
        "Transportation Due Fees",
        "Hostel Fees Paid",
        "Hostel Fees Due",
    ])?;

    let n_students = 60;
    for i in 0..n_students {
        let name = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));

        // Academic fees: a total between 60k and 120k, paid in part.
        let academic_total = (60.0 + rng.next_f64() * 60.0).round() * 1000.0;
        let paid_fraction = 0.3 + rng.next_f64() * 0.7;
        let academic_paid = whole(academic_total * paid_fraction / 100.0) * 100.0;
        let academic_due = (academic_total - academic_paid).max(0.0);

        let transport_paid = whole(rng.gauss(12_000.0, 4_000.0));
        let transport_due = whole(rng.gauss(3_000.0, 2_000.0));
        let hostel_paid = whole(rng.gauss(30_000.0, 8_000.0));
        let hostel_due = whole(rng.gauss(8_000.0, 5_000.0));

        // Sprinkle in the dirt real registers have: text where a number
        // should be, and blank cells. Both exercise the normalizer.
        let academic_due_cell = if i % 9 == 4 {
            "pending".to_string()
        } else {
            format!("{academic_due:.0}")
        };
        let transport_paid_cell = if i % 13 == 6 {
            String::new()
        } else {
            format!("{transport_paid:.0}")
        };

        writer.write_record([
            name,
            format!("{academic_paid:.0}"),
            academic_due_cell,
            format!("{academic_total:.0}"),
            transport_paid_cell,
            format!("{transport_due:.0}"),
            format!("{hostel_paid:.0}"),
            format!("{hostel_due:.0}"),
        ])?;
    }

    writer.flush().context("flushing output file")?;
    println!("Wrote {n_students} student fee records to {output_path}");
    Ok(())
}
