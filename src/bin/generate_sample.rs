use serde_json::{json, Map, Value};

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let base_names = [
        "realistic_vision", "dreamshaper", "anything", "deliberate", "juggernaut",
        "epic_photogasm", "rev_animated", "meina_mix", "protogen", "cyber_realistic",
    ];
    let extensions = ["safetensors", "ckpt", "pt"];

    // (status, details, recovered) – recovered rows get model metadata.
    let outcomes: [(&str, &str, bool); 5] = [
        ("Successfully recovered", "matched by SHA-256 hash", true),
        ("Success", "matched by filename lookup", true),
        ("Failed", "no match found on remote registry", false),
        ("File already exists", "already registered in the database", false),
        ("Skipped", "file type not eligible for recovery", false),
    ];

    let mut results: Vec<Value> = Vec::new();
    let mut successful = 0u64;
    let mut failed = 0u64;
    let mut skipped = 0u64;
    let mut duplicates = 0u64;
    let mut total_size = 0u64;

    for i in 0..40 {
        let name = format!(
            "{}_{:02}.{}",
            rng.pick(&base_names),
            i,
            rng.pick(&extensions)
        );
        let filepath = format!("/models/downloads/{name}");

        let &(status, details, recovered) = rng.pick(&outcomes);
        match status {
            "Successfully recovered" | "Success" => successful += 1,
            "Failed" => failed += 1,
            _ => skipped += 1,
        }

        // 10 MB .. ~8 GB, half rendered human-readable, half as raw bytes.
        let bytes = 10_000_000 + (rng.next_f64() * 8.0e9) as u64;
        total_size += bytes;
        let size: Value = if rng.next_f64() < 0.5 {
            json!(format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0)))
        } else {
            json!(bytes)
        };

        let mut record = Map::new();
        record.insert("filename".into(), json!(name));
        record.insert("filepath".into(), json!(filepath));
        record.insert("status".into(), json!(status));
        record.insert("size".into(), size);
        record.insert("details".into(), json!(details));

        if recovered {
            let model_id = 10_000 + (rng.next_u64() % 90_000);
            record.insert("modelId".into(), json!(model_id.to_string()));
            record.insert("versionId".into(), json!((model_id * 7 % 100_000).to_string()));
            record.insert("modelName".into(), json!(name.rsplit_once('.').map(|(stem, _)| stem.to_string()).unwrap_or(name.clone())));
        }

        // Every eighth file has a content twin elsewhere on disk.
        if i % 8 == 3 {
            duplicates += 1;
            record.insert(
                "duplicateFiles".into(),
                json!([format!("/models/backup/{name}")]),
            );
        }

        results.push(Value::Object(record));
    }

    let total = results.len();
    let report = json!({
        "results": results,
        "statistics": {
            "successful": successful,
            "failed": failed,
            "skipped": skipped,
            "duplicates": duplicates,
            "total": total,
            "totalSize": total_size,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        },
    });

    let output_path = "sample-data/recovery-report.json";
    std::fs::create_dir_all("sample-data").expect("Failed to create sample-data directory");
    std::fs::write(
        output_path,
        serde_json::to_string_pretty(&report).expect("Failed to serialize report"),
    )
    .expect("Failed to write sample report");

    println!(
        "Wrote {total} results ({successful} recovered, {failed} failed, {skipped} skipped) to {output_path}"
    );
}
