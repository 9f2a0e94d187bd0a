use kata::flag_sort::sort_limited_range;
use kata::gen_sequences::gen_ternary;
use kata::utils::RunTimer;

use clap::Parser;

const N_RUNS: usize = 5;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of elements in the generated {0, 1, 2} sequence
    #[arg(short, long)]
    n: usize,
    /// Also time slice::sort_unstable on the same input as a baseline
    #[arg(short, long)]
    baseline: bool,
}

fn main() {
    let args = Args::parse();
    let data = gen_ternary(args.n);

    let mut t = RunTimer::new(N_RUNS, args.n);
    for _ in 0..N_RUNS {
        let mut v = data.clone();
        t.start();
        sort_limited_range(&mut v).expect("generated input is within the {0, 1, 2} domain");
        t.stop();
        std::hint::black_box(&v);
    }

    let (t_min, t_max, t_avg) = t.summary();
    println!(
        "FLAG_SORT: [n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]",
        args.n, t_min, t_max, t_avg, N_RUNS
    );

    if args.baseline {
        let mut t = RunTimer::new(N_RUNS, args.n);
        for _ in 0..N_RUNS {
            let mut v = data.clone();
            t.start();
            v.sort_unstable();
            t.stop();
            std::hint::black_box(&v);
        }

        let (t_min, t_max, t_avg) = t.summary();
        println!(
            "SORT_UNSTABLE: [n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]",
            args.n, t_min, t_max, t_avg, N_RUNS
        );
    }
}
