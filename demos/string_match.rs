//! Evolves a bit string that spells a target phrase.
//!
//! The phrase is encoded as 8 bits per byte; fitness is the number of bits
//! that already agree with the encoding. Run with `RUST_LOG=debug` to see
//! per-run diagnostics.

use std::time::Instant;
use u_bitga::{EvolutionConfig, EvolutionRunner, FnProblem, Genome, MutationParams};

const TARGET: &str = "Hello, World!";

fn encode(text: &str) -> Genome {
    Genome::new(
        text.bytes()
            .flat_map(|byte| (0..8).rev().map(move |bit| (byte >> bit) & 1 == 1))
            .collect(),
    )
}

fn decode(genome: &Genome) -> String {
    genome
        .genes()
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &g| (acc << 1) | g as u8))
        .map(|byte| {
            if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '?'
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    let target = encode(TARGET);
    let genome_length = target.len();
    let problem = FnProblem::random(50, genome_length, move |g: &Genome| {
        g.hamming_similarity(&target)
    })
    .with_mutation_params(MutationParams::new(2, 0.5));

    let config = EvolutionConfig::new(genome_length).with_generation_limit(5_000);

    let start = Instant::now();
    let result = match EvolutionRunner::run(&problem, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("evolution failed: {e}");
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("number of generations: {}", result.generation);
    println!("time: {:.3}s", elapsed.as_secs_f64());
    println!("termination: {:?}", result.termination);
    println!(
        "best fitness: {}/{} bits",
        result.best_fitness, genome_length
    );
    println!("result: {}", result.best());
    println!("decoded: {:?}", decode(result.best()));
}
