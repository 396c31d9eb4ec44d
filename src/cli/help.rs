//! Usage and version text

use std::io::{self, Write};

const USAGE: &[&str] = &[
    "Usage: rawk [Options] [Program] [file ...]",
    "",
    "Program:",
    "    The -f option value is the name of a file containing program text.",
    "    If no -f option is given, a \"--\" ends option processing; the following",
    "    parameters are the program text.",
    "",
    "Options:",
    "    -f program-file  Program  text is read from file instead of from the",
    "                     command-line.  Multiple -f options are accepted.",
    "    -F value         sets the field separator, FS, to value.",
    "    -v var=value     assigns value to program variable var.",
    "    --               unambiguous end of options.",
    "",
    "    Implementation-specific options are prefixed with \"-W\".  They can be",
    "    abbreviated:",
    "",
    "    -W version       show version information.",
    #[cfg(feature = "binmode")]
    "    -W binmode=number set binary mode for input and output.",
    "    -W dump          show a listing of the program and exit.",
    "    -W help          show this message and exit.",
    "    -W interactive   set unbuffered output, line-buffered input.",
    "    -W exec file     use file as program as well as last option.",
    "    -W random=number set initial random seed.",
    "    -W sprintf=number adjust size of sprintf buffer.",
    "    -W posix_space   do not consider \"\\n\" a space.",
    "    -W usage         show this message and exit.",
];

/// Write the usage text, one line per entry
pub fn write_usage(out: &mut dyn Write) -> io::Result<()> {
    for line in USAGE {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Version banner followed by the compiled limits
pub fn version_text(program_name: &str, sprintf_limit: usize) -> String {
    format!(
        "{program_name} {version}\n\
         \n\
         random-funcs:       rand::rngs::StdRng\n\
         regex-funcs:        regex\n\
         \n\
         compiled limits:\n\
         sprintf buffer      {sprintf_limit}\n\
         maximum-integer     {max}\n",
        version = env!("CARGO_PKG_VERSION"),
        max = i32::MAX,
    )
}
