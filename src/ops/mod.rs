//! Per-operator handlers (spec §2 component 8): small procedures that read
//! operands and call back into the Engine. Specified only through the
//! Engine contracts they depend on; grouped into submodules by category.

pub mod color;
pub mod graphics;
pub mod marked_content;
pub mod path;
pub mod text_show;
pub mod text_state;
pub mod xobject;

use crate::registry::{HandlerFn, OperatorRegistry};
use crate::sink::TextPositionSink;

/// Register every built-in operator this crate knows about against a
/// fresh registry (spec §4.1's enumerated mnemonics, plus the
/// marked-content/path/colour no-ops supplemented in `SPEC_FULL.md` §B).
pub fn register_defaults<S: TextPositionSink>(reg: &mut OperatorRegistry<S>) {
    reg.register("q", graphics::op_q as HandlerFn<S>);
    reg.register("Q", graphics::op_q_restore as HandlerFn<S>);
    reg.register("cm", graphics::op_cm as HandlerFn<S>);
    reg.register("w", graphics::op_w as HandlerFn<S>);
    reg.register("J", graphics::op_capital_j as HandlerFn<S>);
    reg.register("j", graphics::op_j as HandlerFn<S>);
    reg.register("M", graphics::op_m as HandlerFn<S>);
    reg.register("d", graphics::op_d as HandlerFn<S>);
    reg.register("ri", graphics::op_ri as HandlerFn<S>);
    reg.register("i", graphics::op_i as HandlerFn<S>);
    reg.register("gs", graphics::op_gs as HandlerFn<S>);

    reg.register("BT", text_state::op_bt as HandlerFn<S>);
    reg.register("ET", text_state::op_et as HandlerFn<S>);
    reg.register("Tc", text_state::op_tc as HandlerFn<S>);
    reg.register("Tw", text_state::op_tw as HandlerFn<S>);
    reg.register("Tz", text_state::op_tz as HandlerFn<S>);
    reg.register("TL", text_state::op_tl as HandlerFn<S>);
    reg.register("Tf", text_state::op_tf as HandlerFn<S>);
    reg.register("Tr", text_state::op_tr as HandlerFn<S>);
    reg.register("Ts", text_state::op_ts as HandlerFn<S>);

    reg.register("Td", text_show::op_td as HandlerFn<S>);
    reg.register("TD", text_show::op_td_leading as HandlerFn<S>);
    reg.register("Tm", text_show::op_tm as HandlerFn<S>);
    reg.register("T*", text_show::op_t_star as HandlerFn<S>);
    reg.register("Tj", text_show::op_tj as HandlerFn<S>);
    reg.register("TJ", text_show::op_tj_array as HandlerFn<S>);
    reg.register("'", text_show::op_quote as HandlerFn<S>);
    reg.register("\"", text_show::op_doublequote as HandlerFn<S>);

    reg.register("Do", xobject::op_do as HandlerFn<S>);

    for mnemonic in ["BMC", "BDC", "EMC", "MP", "DP"] {
        reg.register(mnemonic, marked_content::op_noop as HandlerFn<S>);
    }

    for mnemonic in [
        "m", "l", "c", "v", "y", "h", "re", "S", "s", "f", "F", "f*", "B", "B*", "b", "b*", "n",
        "W", "W*",
    ] {
        reg.register(mnemonic, path::op_noop as HandlerFn<S>);
    }

    reg.register("g", color::op_g as HandlerFn<S>);
    reg.register("G", color::op_capital_g as HandlerFn<S>);
    reg.register("rg", color::op_rg as HandlerFn<S>);
    reg.register("RG", color::op_capital_rg as HandlerFn<S>);
    reg.register("k", color::op_k as HandlerFn<S>);
    reg.register("K", color::op_capital_k as HandlerFn<S>);
    for mnemonic in ["sc", "SC", "scn", "SCN", "cs", "CS"] {
        reg.register(mnemonic, color::op_noop as HandlerFn<S>);
    }
}

/// Resolve a handler identifier from an `OperatorConfig` entry against the
/// compile-time table (spec §4.1, §6, §9). Identifiers match the built-in
/// mnemonic spelling; this is the "plug-in mechanism" the spec leaves
/// implementation-defined.
pub fn handler_by_identifier<S: TextPositionSink>(identifier: &str) -> Option<HandlerFn<S>> {
    let f: HandlerFn<S> = match identifier {
        "q" => graphics::op_q,
        "Q" => graphics::op_q_restore,
        "cm" => graphics::op_cm,
        "w" => graphics::op_w,
        "J" => graphics::op_capital_j,
        "j" => graphics::op_j,
        "M" => graphics::op_m,
        "d" => graphics::op_d,
        "ri" => graphics::op_ri,
        "i" => graphics::op_i,
        "gs" => graphics::op_gs,
        "BT" => text_state::op_bt,
        "ET" => text_state::op_et,
        "Tc" => text_state::op_tc,
        "Tw" => text_state::op_tw,
        "Tz" => text_state::op_tz,
        "TL" => text_state::op_tl,
        "Tf" => text_state::op_tf,
        "Tr" => text_state::op_tr,
        "Ts" => text_state::op_ts,
        "Td" => text_show::op_td,
        "TD" => text_show::op_td_leading,
        "Tm" => text_show::op_tm,
        "T*" => text_show::op_t_star,
        "Tj" => text_show::op_tj,
        "TJ" => text_show::op_tj_array,
        "'" => text_show::op_quote,
        "\"" => text_show::op_doublequote,
        "Do" => xobject::op_do,
        "BMC" | "BDC" | "EMC" | "MP" | "DP" => marked_content::op_noop,
        "path_noop" => path::op_noop,
        "g" => color::op_g,
        "G" => color::op_capital_g,
        "rg" => color::op_rg,
        "RG" => color::op_capital_rg,
        "k" => color::op_k,
        "K" => color::op_capital_k,
        "color_noop" => color::op_noop,
        _ => return None,
    };
    Some(f)
}
