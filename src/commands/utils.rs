use std::io::{self, Write};

/// Display version information
pub fn display_version(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "objutils v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(
        out,
        "Map and collection helpers with duplicate-key JSON pair extraction."
    )?;
    Ok(())
}
