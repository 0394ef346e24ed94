use clap::Parser;
use infusion_roi_simulator::{app, i18n, logger};

/// 프로그램의 엔트리 포인트. 옵션을 해석한 뒤 예측을 실행한다.
fn main() {
    let opts = app::RunOptions::parse();
    logger::init_cli_logger(opts.verbose);

    if let Err(err) = app::run(&opts) {
        let lang = i18n::resolve_language(opts.lang.as_deref(), None);
        let tr = i18n::Translator::new(&lang);
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}
