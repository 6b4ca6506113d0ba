use std::path::PathBuf;
use std::process::ExitCode;
use ansi_term::Color::{Green, Red, Yellow};
use clap::{Parser, Subcommand};
use log::info;
use tex_engine::prelude::*;
use tex_tfm::FontMetrics;

#[derive(Parser,Debug)]
#[clap(author, version, about, long_about = None)]
struct Parameters {
    /// more logging (-v: info, -vv: debug, -vvv: trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command
}

#[derive(Subcommand,Debug)]
enum Command {
    /// Decode a font metric (.tfm) file
    Tfm {
        file: PathBuf,
        /// list the dimensions of every character
        #[clap(short, long, default_value_t = false)]
        chars: bool
    },
    /// Print the default category codes of printable ASCII
    Catcodes,
    /// Boot a kernel against a font directory
    Boot {
        /// directory containing cmr10.tfm etc.
        #[clap(short, long)]
        area: PathBuf
    }
}

fn main() -> ExitCode {
    let params = Parameters::parse();
    let level = match params.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace
    };
    env_logger::builder().filter_level(level).init();
    let ret = match params.command {
        Command::Tfm { file, chars } => tfm(file,chars),
        Command::Catcodes => { catcodes(); Ok(()) }
        Command::Boot { area } => boot(area)
    };
    match ret {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{}",Red.paint(msg));
            ExitCode::FAILURE
        }
    }
}

fn tfm(file:PathBuf,chars:bool) -> Result<(),String> {
    let metrics = FontMetrics::from_file(&file)
        .map_err(|d| format!("! {} [{}]",d,d.origin))?;
    info!("Decoded {}",file.display());
    println!("{}",Green.paint(file.display().to_string()));
    println!("  checksum:        {:#010X}",metrics.checksum());
    println!("  design size:     {}pt",metrics.design_size());
    println!("  coding scheme:   {}",metrics.coding_scheme());
    println!("  identifier:      {}",metrics.font_identifier());
    println!("  face:            {}",metrics.face());
    println!("  seven-bit safe:  {}",metrics.seven_bit_safe());
    println!("  characters:      {}..={} ({} entries)",metrics.char_lower(),metrics.char_upper(),metrics.char_count());
    println!("  tables:          {} widths, {} heights, {} depths, {} italics",
        metrics.widths().len(),metrics.heights().len(),metrics.depths().len(),metrics.italics().len());
    let sizes = metrics.table_sizes();
    println!("  undecoded:       {} lig/kern, {} kern, {} extensible, {} params",
        sizes.lig_kern,sizes.kern,sizes.extensible,sizes.params);
    if chars {
        for code in metrics.char_lower()..=metrics.char_upper().min(255) {
            if let Some(d) = metrics.dimensions(code as u8) {
                println!("  {:>3} {:?}: wd {:.5} ht {:.5} dp {:.5} ic {:.5}",code,code as u8 as char,
                    d.width.to_f64(),d.height.to_f64(),d.depth.to_f64(),d.italic_correction.to_f64());
            }
        }
    }
    Ok(())
}

fn catcodes() {
    let table = CategoryCodeTable::default();
    for c in 0x20u8..0x7F {
        let cc = table.classify(c);
        let line = format!("{:?} {:>2} {}",c as char,u8::from(cc),cc);
        if cc == CategoryCode::Other {
            println!("{}",line)
        } else {
            println!("{}",Yellow.paint(line))
        }
    }
}

fn boot(area:PathBuf) -> Result<(),String> {
    let mut source = DirectoryFontSource::new(area);
    let kernel = Kernel::<()>::new(&KernelConfig::default(),&mut source)
        .map_err(|e| e.to_string())?;
    for (i,font) in kernel.fonts.iter().enumerate() {
        println!("{:>3} \\{} = {} at {}",i,font.name,
            if font.file.is_empty() { "-" } else { &font.file },font.size());
    }
    println!("current font: \\{}",kernel.current_font().name);
    println!("{} command sequences in {} buckets",kernel.commands.entries(),kernel.commands.capacity());
    println!("mode: {}",kernel.render.mode());
    Ok(())
}
