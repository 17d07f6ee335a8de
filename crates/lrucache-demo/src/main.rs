//! Replays the reference eviction scenario against an LruCache

use anyhow::Result;
use clap::Parser;
use lrucache::LruCache;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of items)
    #[arg(short, long, default_value_t = 4)]
    capacity: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Cache capacity: {}", args.capacity);

    let mut cache = LruCache::new(args.capacity)?;
    for line in replay(&mut cache) {
        println!("{}", line);
    }

    let stats = cache.stats().snapshot();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        "done"
    );

    Ok(())
}

/// Run the dog/cat/frog scenario, returning the lines to print
fn replay(cache: &mut LruCache<&'static str, u32>) -> Vec<String> {
    let mut out = Vec::new();

    for (key, value) in [("dog", 100), ("cat", 10), ("frog", 30), ("last", 2)] {
        set(cache, key, value);
    }
    out.push(order_line(cache));

    out.push(lookup(cache, "dog"));
    out.push(order_line(cache));

    set(cache, "full memory", 50);
    set(cache, "remove least used", 40);
    out.push(order_line(cache));

    out.push(lookup(cache, "cat"));
    out
}

fn set(cache: &mut LruCache<&'static str, u32>, key: &'static str, value: u32) {
    if let Some((evicted, _)) = cache.set(key, value) {
        info!("evicted {:?} to make room for {:?}", evicted, key);
    }
}

fn lookup(cache: &mut LruCache<&'static str, u32>, key: &str) -> String {
    match cache.get(key) {
        Some(value) => format!("get {} -> {}", key, value),
        None => format!("get {} -> not found", key),
    }
}

fn order_line(cache: &LruCache<&'static str, u32>) -> String {
    let keys: Vec<_> = cache.iter().map(|(key, value)| format!("{}={}", key, value)).collect();
    format!(
        "size {}/{} (MRU -> LRU): {}",
        cache.size(),
        cache.capacity(),
        keys.join(", ")
    )
}
