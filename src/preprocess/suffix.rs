//! Macro suffix for backends that cannot declare `threadgroup` memory globally.
//!
//! Metal only allows threadgroup variables inside the kernel entry point. The
//! backend wrapper generator therefore declares them there, passes references
//! into its wrapper class constructor and binds them to members. The four
//! macros below carry each piece of that glue; their names and token layout
//! are consumed verbatim by the wrapper generator.
//!
//! All four lists are positional and must follow declaration order.

use super::shared::SharedVar;

/// Arguments of the wrapper class constructor.
pub const ARGS_MACRO: &str = "MSL_SHARED_VARS_ARGS";
/// Reference bindings in the constructor initializer list.
pub const ASSIGN_MACRO: &str = "MSL_SHARED_VARS_ASSIGN";
/// Threadgroup declarations inside the entry point.
pub const DECLARE_MACRO: &str = "MSL_SHARED_VARS_DECLARE";
/// Arguments of the wrapper constructor call.
pub const PASS_MACRO: &str = "MSL_SHARED_VARS_PASS";

/// Build the `#undef`/`#define` block for `vars`, or `""` when there are none.
pub fn shared_vars_suffix(vars: &[SharedVar]) -> String {
    if vars.is_empty() {
        return String::new();
    }

    let mut args = String::new();
    let mut assign = String::new();
    let mut declare = String::new();
    let mut pass = String::new();

    for (i, var) in vars.iter().enumerate() {
        let first = i == 0;
        let sep = if first { ' ' } else { ',' };
        let SharedVar { ty, name, array } = var;
        args.push_str(&format!("{sep}threadgroup {ty}(&_{name}){array}"));
        assign.push_str(&format!("{}{name}(_{name})", if first { ':' } else { ',' }));
        declare.push_str(&format!("threadgroup {ty} {name}{array};"));
        pass.push_str(&format!("{sep}{name}"));
    }

    let mut out = String::new();
    for macro_name in [ARGS_MACRO, ASSIGN_MACRO, DECLARE_MACRO, PASS_MACRO] {
        out.push_str(&format!("#undef {macro_name}\n"));
    }
    out.push_str(&format!("#define {ARGS_MACRO} {args}\n"));
    out.push_str(&format!("#define {ASSIGN_MACRO} {assign}\n"));
    out.push_str(&format!("#define {DECLARE_MACRO} {declare}\n"));
    out.push_str(&format!("#define {PASS_MACRO} ({pass})\n"));
    out
}
