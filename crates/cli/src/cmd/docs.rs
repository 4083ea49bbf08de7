use mkhelp_core::docs;
use std::path::Path;
use tracing::debug;

use crate::DocsArgs;

pub fn run(config: Option<&Path>, args: &DocsArgs) {
    let (rc, _log) = super::init(config, "docs");

    let makefile = args.makefile.as_deref().unwrap_or(&rc.makefile);
    let format = args.format.as_deref().unwrap_or(rc.format.as_str());
    debug!(makefile = %makefile.display(), format, "docs");

    match docs(makefile, format) {
        Ok(out) => {
            print!("{out}");
            if !out.is_empty() && !out.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            println!("FAIL mkhelp docs");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
