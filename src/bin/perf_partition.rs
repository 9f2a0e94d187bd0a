use kata::gen_sequences::gen_values;
use kata::partition::move_to_end;
use kata::utils::RunTimer;

use clap::Parser;

const N_RUNS: usize = 5;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of elements in the generated sequence
    #[arg(short, long)]
    n: usize,
    /// Values are drawn from [0, range); 0 is the sentinel moved to the back
    #[arg(short, long, default_value_t = 8)]
    range: u64,
}

fn main() {
    let args = Args::parse();
    let data = gen_values(args.n, args.range);
    let sentinel = 0i64;

    let mut t = RunTimer::new(N_RUNS, args.n);
    for _ in 0..N_RUNS {
        let mut v = data.clone();
        t.start();
        move_to_end(&mut v, &sentinel);
        t.stop();
        std::hint::black_box(&v);
    }

    let (t_min, t_max, t_avg) = t.summary();
    println!(
        "MOVE_TO_END: [n: {}, range: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]",
        args.n, args.range, t_min, t_max, t_avg, N_RUNS
    );
}
