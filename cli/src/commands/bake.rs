use std::io::{self, Write};

use bake_common::config::Config;
use bake_dough::Crust;
use bake_filling::Apple;
use tracing::{debug, info_span};

use crate::terminal::print;

/// Assembles the pie from `cfg` and reports each step to `out`.
pub fn bake<W: Write>(out: &mut W, cfg: &Config) -> io::Result<()> {
    let span = info_span!("bake", temperature = cfg.temperature);
    let _guard = span.enter();

    let dough = Crust::new(cfg.recipe.as_str());
    let filling = Apple::new(cfg.variety.as_str());
    debug!("crust and filling ready");

    print::line(out, dough.layer())?;
    print::line(out, filling.fill())?;
    print::line(out, &cfg.status_line())?;

    out.flush()
}
