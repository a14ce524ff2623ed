use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use std::hint::black_box;
use SokobanSafety::core::{Puzzle, Rules};
use SokobanSafety::player::{play, RandomPlayer};

const PUZZLES: &[(&str, &str, usize, SamplingMode)] = &[
    ("puzzle_1", r#"
    ######
    #@$ .#
    ######
    "#, 100, SamplingMode::Auto),
    ("puzzle_2", r#"
    ######
    #@$  #
    # $. #
    # .  #
    ######
    "#, 100, SamplingMode::Auto),
    ("puzzle_3", r#"
    ########
    # @$  .#
    # $  $ #
    # .# $ #
    #..#   #
    ########
    "#, 100, SamplingMode::Auto),
    ("puzzle_4", r#"
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#, 50, SamplingMode::Flat),
];

pub fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    for &(puzzle_name, puzzle, sample_size, sample_mode) in PUZZLES {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        for chain_pushes in [false, true] {
            let puzzle = Puzzle::with_rules(puzzle, Rules { chain_pushes }).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("chain_pushes_{}", chain_pushes), puzzle_name),
                &puzzle,
                |b, puzzle| b.iter(|| black_box(puzzle).legal_moves()),
            );
        }
    }
    group.finish();
}

pub fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");

    for &(puzzle_name, puzzle, sample_size, sample_mode) in PUZZLES {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new("seeded_200_moves", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter_with_setup(
                    || (Puzzle::from_screen(puzzle).unwrap(), RandomPlayer::seeded(42)),
                    |(mut puzzle, mut player)| {
                        let outcome = play(black_box(&mut puzzle), &mut player, 200, |_, _| {}).unwrap();
                        black_box(outcome)
                    },
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    legal_move_benches,
    bench_legal_moves, bench_random_playout
);

criterion_main!(legal_move_benches);
