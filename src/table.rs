/// Generates the `Page` records and the NULL-terminated `pages[]` table that
/// the firmware iterates over. This is a pure function of the identifier
/// list, so the stdout copy and the stderr hint always agree.
pub fn make_include_code<S: AsRef<str>>(idents: &[S]) -> String {
    let mut ret = String::new();

    for (n, ident) in idents.iter().enumerate() {
        let ident = ident.as_ref();
        ret += &format!(
            "const Page {} PROGMEM = {{{}_name, {}, {}_len, NULL}};\n",
            page_symbol(n),
            ident,
            ident,
            ident
        );
    }

    ret += "\n";

    ret += "const Page* const pages[] PROGMEM = {\n";
    for n in 0..idents.len() {
        ret += &format!("\t&{},\n", page_symbol(n));
    }

    ret += "\tNULL\n";
    ret += "};";

    ret
}

/// Records are numbered from 1 in the generated code.
fn page_symbol(index: usize) -> String {
    format!("page{:02}", index + 1)
}
