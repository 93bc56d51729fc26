// Copyright 2026 libcache Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Replays a synthetic key workload against every requested eviction policy and reports hit ratios.

use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use libcache::{CacheBuilder, Registry};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution as _, Zipf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Cache capacity in entries. 0 means unbounded.
    #[arg(short, long, default_value_t = 1024)]
    capacity: usize,

    /// Size of the key space.
    #[arg(short, long, default_value_t = 16384)]
    keys: u64,

    /// Number of accesses replayed against each policy.
    #[arg(short, long, default_value_t = 1_000_000)]
    ops: usize,

    /// Policies to bench, comma separated. Benches every registered policy if empty.
    #[arg(short, long, value_delimiter = ',')]
    policies: Vec<String>,

    /// Key distribution.
    #[arg(long, value_enum, default_value_t = Distribution::Zipf)]
    distribution: Distribution,

    /// Zipf exponent.
    #[arg(long, default_value_t = 0.9)]
    s: f64,

    /// Key stream seed. Every policy replays the same stream.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Distribution {
    Uniform,
    Zipf,
    /// Sequential scan over the key space, repeated.
    Scan,
}

#[derive(Debug, Default)]
struct Stats {
    hits: usize,
    misses: usize,
    elapsed: Duration,
}

impl Stats {
    fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}

fn init_logger() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_line_number(true))
        .with(EnvFilter::from_default_env())
        .init();
}

fn workload(args: &Args) -> Result<Vec<u64>> {
    if args.keys == 0 {
        bail!("key space must not be empty");
    }
    let mut rng = StdRng::seed_from_u64(args.seed);
    let keys = match args.distribution {
        Distribution::Uniform => (0..args.ops).map(|_| rng.random_range(0..args.keys)).collect(),
        Distribution::Zipf => {
            let zipf = Zipf::new(args.keys as f64, args.s).map_err(|e| anyhow!("invalid zipf parameters: {e}"))?;
            // Samples fall in [1, keys].
            (0..args.ops).map(|_| zipf.sample(&mut rng) as u64 - 1).collect()
        }
        Distribution::Scan => (0..args.keys).cycle().take(args.ops).collect(),
    };
    Ok(keys)
}

fn bench(registry: &Registry<u64, u64>, policy: &str, capacity: usize, keys: &[u64]) -> Result<Stats> {
    let mut cache = CacheBuilder::new(capacity).with_policy(policy).build(registry)?;
    let mut stats = Stats::default();

    let start = Instant::now();
    for &key in keys {
        if cache.get(&key).is_some() {
            stats.hits += 1;
        } else {
            stats.misses += 1;
            cache.insert(key, key);
        }
    }
    stats.elapsed = start.elapsed();

    tracing::debug!("[bench]: policy {policy} finished with {} resident entries", cache.len());
    Ok(stats)
}

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();
    tracing::info!("args: {args:#?}");

    let registry = Registry::<u64, u64>::builtin()?;
    let policies = if args.policies.is_empty() {
        registry.names().map(str::to_string).collect_vec()
    } else {
        args.policies.clone()
    };

    let keys = workload(&args)?;

    println!(
        "capacity: {}, keys: {}, ops: {}, distribution: {:?}",
        args.capacity, args.keys, args.ops, args.distribution
    );
    for policy in &policies {
        let stats = bench(&registry, policy, args.capacity, &keys)?;
        println!(
            "{policy:>8}: hit ratio {:>6.2}%, hits {:>10}, misses {:>10}, elapsed {:?}",
            stats.hit_ratio() * 100.0,
            stats.hits,
            stats.misses,
            stats.elapsed
        );
    }

    Ok(())
}
