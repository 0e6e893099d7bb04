/// Map a bare editor name to a template that blocks until the file is closed,
/// or return the value as-is.
pub(super) fn resolve_editor_command(name: &str) -> String {
    let candidates: &[(&str, &str)] = &[
        ("code",   "code --wait %s"),
        ("cursor", "cursor --wait %s"),
        ("zed",    "zed --wait %s"),
        ("subl",   "subl --wait %s"),
        ("mate",   "mate -w %s"),
        ("nvim",   "nvim %s"),
        ("vim",    "vim %s"),
        ("vi",     "vi %s"),
        ("nano",   "nano %s"),
        ("hx",     "hx %s"),
        ("emacs",  "emacs %s"),
    ];
    for &(sym, cmd) in candidates {
        if name.eq_ignore_ascii_case(sym) {
            return cmd.to_string();
        }
    }
    name.to_string()
}
