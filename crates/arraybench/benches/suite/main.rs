//! Array library comparison suite.
//!
//! Run with `cargo bench --bench suite`; criterion's own flags (filters,
//! `--save-baseline`, `--baseline`) pass through.

mod add_1d;
mod add_1d_legacy;
mod allocators;
mod broadcasting;
mod constructor;
mod fixed;
mod iterators;
mod scalar_assignment;

use arraybench::config;

fn main() {
    env_logger::init();
    arraybench::print_stats();
    log::info!("{}", arraybench::version_info());

    let config = match config::global() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::debug!("{:?}", config);

    let mut c = config.criterion();

    add_1d::register(&mut c, config);
    add_1d_legacy::register(&mut c, config);
    add_2d::register(&mut c, config);
    add_2d_legacy::register(&mut c, config);
    views::register(&mut c, config);
    broadcasting::register(&mut c, config);
    fixed::register(&mut c, config);
    constructor::register(&mut c, config);
    scalar_assignment::register(&mut c, config);
    iterators::register(&mut c, config);
    lazy_evaluation::register(&mut c, config);
    padding::register(&mut c, config);
    allocators::register(&mut c, config);

    c.final_summary();
}
