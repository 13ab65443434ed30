//! keysheet CLI - thermal printer cheatsheet generator

mod files;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use keysheet::{
    raster, to_json, to_markdown, CheatsheetDocument, JsonFormat, Keysheet, LayoutMetrics,
    RenderOptions, SheetStyle, Typeface, DEFAULT_PIXEL_WIDTH,
};

use files::{
    collect_inputs, file_stem, load_document, specimen_file_name, write_page_images,
    write_text_pages,
};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Font families compared by the `specimen` command when none are given.
const SPECIMEN_FONTS: &[&str] = &[
    "Noto Sans",
    "Liberation Mono",
    "Noto Sans Mono",
    "JetBrainsMono Nerd Font Mono",
    "Adwaita Mono",
];

#[derive(Parser)]
#[command(name = "keysheet")]
#[command(version)]
#[command(about = "Render keyboard-shortcut cheatsheets for thermal printers", long_about = None)]
struct Cli {
    /// Input TOML files or directories
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every artifact (text, page images, styled sheet, Markdown)
    Build {
        /// Input TOML files or directories
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "cheatsheets")]
        output: PathBuf,

        /// Also write a JSON dump of each document
        #[arg(long)]
        json: bool,

        /// Skip page images and styled sheets
        #[arg(long)]
        no_images: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render paginated plain text
    Text {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (stdout if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the parsed document as JSON
    Json {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render one 1-bit PNG per text page
    Image {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render the whole document as one styled PNG
    Sheet {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to <stem>_sheet.png)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Printer width in pixels
        #[arg(long, env = "KEYSHEET_WIDTH", default_value_t = DEFAULT_PIXEL_WIDTH)]
        width: u32,

        /// Font family or font file
        #[arg(long, env = "KEYSHEET_FONT", default_value = "Liberation Mono")]
        font: String,
    },

    /// Compare fonts on an excerpt of the first section
    Specimen {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "font-tests")]
        output: PathBuf,

        /// Font family or font file (repeatable)
        #[arg(long = "font", value_name = "FONT")]
        fonts: Vec<String>,

        /// Printer width in pixels
        #[arg(long, env = "KEYSHEET_WIDTH", default_value_t = DEFAULT_PIXEL_WIDTH)]
        width: u32,
    },

    /// Show the font size and line pitch derived from the layout options
    Metrics {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show document information
    Info {
        /// Input TOML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

/// Layout and raster options shared by the rendering commands.
#[derive(Args, Debug, Clone)]
struct LayoutArgs {
    /// Printer width in pixels
    #[arg(long, env = "KEYSHEET_WIDTH", default_value_t = DEFAULT_PIXEL_WIDTH)]
    width: u32,

    /// Padding around page images in pixels
    #[arg(long, env = "KEYSHEET_PADDING", default_value_t = 8)]
    padding: u32,

    /// Characters per text line
    #[arg(long, env = "KEYSHEET_CHARS", default_value_t = 35)]
    chars: usize,

    /// Width of the key column in characters
    #[arg(long, env = "KEYSHEET_KEY_COLUMN", default_value_t = 13)]
    key_column: usize,

    /// Maximum lines per page
    #[arg(long, env = "KEYSHEET_MAX_LINES", default_value_t = 60)]
    max_lines: usize,

    /// Content lines a page needs before it may break
    #[arg(long, env = "KEYSHEET_MIN_LINES", default_value_t = 10)]
    min_lines: usize,

    /// Font family or font file
    #[arg(long, env = "KEYSHEET_FONT", default_value = "Liberation Mono")]
    font: String,

    /// Glyph advance as a fraction of the font size
    #[arg(long, env = "KEYSHEET_CHAR_RATIO", default_value_t = 0.625)]
    char_ratio: f32,

    /// Line pitch as a multiple of the font size
    #[arg(long, env = "KEYSHEET_LINE_HEIGHT", default_value_t = 1.3)]
    line_height: f32,

    /// Process files one at a time
    #[arg(long)]
    sequential: bool,
}

impl LayoutArgs {
    /// Defaults (with environment overrides) when no subcommand is given.
    fn parse_defaults() -> Self {
        #[derive(Parser)]
        struct Defaults {
            #[command(flatten)]
            layout: LayoutArgs,
        }
        Defaults::parse_from(["keysheet"]).layout
    }

    fn to_options(&self) -> RenderOptions {
        let options = RenderOptions::new()
            .with_pixel_width(self.width)
            .with_padding(self.padding)
            .with_chars_per_line(self.chars)
            .with_key_column_width(self.key_column)
            .with_max_lines(self.max_lines)
            .with_min_lines_before_break(self.min_lines)
            .with_font_family(self.font.clone())
            .with_char_width_ratio(self.char_ratio)
            .with_line_height(self.line_height);

        if self.sequential {
            options.sequential()
        } else {
            options
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            inputs,
            output,
            json,
            no_images,
            layout,
        }) => cmd_build(&inputs, &output, json, no_images, &layout),
        Some(Commands::Text {
            input,
            output,
            layout,
        }) => cmd_text(&input, output.as_deref(), &layout),
        Some(Commands::Markdown { input, output }) => cmd_markdown(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Image {
            input,
            output,
            layout,
        }) => cmd_image(&input, &output, &layout),
        Some(Commands::Sheet {
            input,
            output,
            width,
            font,
        }) => cmd_sheet(&input, output.as_deref(), width, &font),
        Some(Commands::Specimen {
            input,
            output,
            fonts,
            width,
        }) => cmd_specimen(&input, &output, &fonts, width),
        Some(Commands::Metrics { layout }) => cmd_metrics(&layout),
        Some(Commands::Info { input, layout }) => cmd_info(&input, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: build if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: keysheet <INPUT>... [-o DIR]".yellow());
                println!("       keysheet --help for more information");
                Ok(())
            } else {
                let output = cli.output.unwrap_or_else(|| PathBuf::from("cheatsheets"));
                let layout = LayoutArgs::parse_defaults();
                cmd_build(&cli.inputs, &output, false, false, &layout)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(
    inputs: &[PathBuf],
    output: &Path,
    json: bool,
    no_images: bool,
    layout: &LayoutArgs,
) -> CmdResult {
    let files = collect_inputs(inputs)?;
    if files.is_empty() {
        return Err("no TOML files found".into());
    }
    println!("Found {} TOML file(s)", files.len());

    fs::create_dir_all(output)?;

    let options = layout.to_options();
    options.validate()?;

    let mut keysheet = Keysheet::new().with_options(options);
    if !no_images {
        keysheet = match keysheet.clone().load_fonts() {
            Ok(loaded) => loaded,
            Err(e) => {
                println!("{} {} (images skipped)", "Warning:".yellow().bold(), e);
                keysheet
            }
        };
    }

    let mut docs = Vec::with_capacity(files.len());
    for file in &files {
        match load_document(file) {
            Ok(doc) => docs.push((file_stem(file), doc)),
            Err(e) => println!("{} {}: {}", "✗".red(), file.display(), e),
        }
    }

    let pb = ProgressBar::new(docs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Rendering...");

    let items = keysheet.render_batch(&docs);
    let mut written = Vec::new();
    let mut failed = files.len() - docs.len();

    for (item, (_, doc)) in items.into_iter().zip(&docs) {
        pb.set_message(item.name.clone());
        let result = item.result.map_err(Into::into).and_then(|out| {
            let mut paths = write_text_pages(output, &item.name, &out)?;
            paths.extend(write_page_images(output, &item.name, &out)?);

            if keysheet.fonts().is_some() {
                let path = output.join(format!("{}_sheet.png", item.name));
                keysheet.render_sheet(doc)?.save_png(&path)?;
                paths.push(path);
            }

            let md_path = output.join(format!("{}.md", item.name));
            fs::write(&md_path, to_markdown(doc))?;
            paths.push(md_path);

            if json {
                let json_path = output.join(format!("{}.json", item.name));
                fs::write(&json_path, to_json(doc, JsonFormat::Pretty)?)?;
                paths.push(json_path);
            }

            Ok::<_, Box<dyn std::error::Error>>((out.page_count(), paths))
        });

        match result {
            Ok((pages, paths)) => {
                pb.println(format!(
                    "{} {} ({} page(s), {} file(s))",
                    "✓".green(),
                    item.name,
                    pages,
                    paths.len()
                ));
                written.extend(paths);
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "✗".red(), item.name, e));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} file(s) written to {}",
        "Output:".green().bold(),
        written.len(),
        output.display()
    );
    if failed > 0 {
        println!("{} {} input(s) failed", "Warning:".yellow().bold(), failed);
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>, layout: &LayoutArgs) -> CmdResult {
    let doc = load_document(input)?;
    let out = Keysheet::new()
        .with_options(layout.to_options())
        .render(&doc)?;

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
        for path in write_text_pages(dir, &file_stem(input), &out)? {
            println!("{} {}", "Saved to".green(), path.display());
        }
    } else {
        for (i, blob) in out.text_blobs().iter().enumerate() {
            if i > 0 {
                println!("{}", "─".repeat(layout.chars).dimmed());
            }
            print!("{}", blob);
        }
    }

    Ok(())
}

fn cmd_markdown(input: &Path, output: Option<&Path>) -> CmdResult {
    let doc = load_document(input)?;
    let markdown = to_markdown(&doc);

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CmdResult {
    let doc = load_document(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_image(input: &Path, output: &Path, layout: &LayoutArgs) -> CmdResult {
    let doc = load_document(input)?;
    let out = Keysheet::new()
        .with_options(layout.to_options())
        .load_fonts()?
        .render(&doc)?;

    fs::create_dir_all(output)?;
    let stem = file_stem(input);
    for (path, image) in write_page_images(output, &stem, &out)?
        .iter()
        .zip(&out.images)
    {
        println!(
            "{} {} ({}x{})",
            "✓ Generated:".green(),
            path.display(),
            image.width,
            image.height
        );
    }

    Ok(())
}

fn cmd_sheet(input: &Path, output: Option<&Path>, width: u32, font: &str) -> CmdResult {
    let doc = load_document(input)?;
    let fonts = Typeface::load(font)?;

    let image = raster::render_sheet(&doc, &SheetStyle::default(), &fonts, width);

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(format!("{}_sheet.png", file_stem(input))));
    image.save_png(&path)?;

    println!(
        "{} {} ({}x{})",
        "✓ Generated:".green(),
        path.display(),
        image.width,
        image.height
    );

    Ok(())
}

fn cmd_specimen(input: &Path, output: &Path, fonts: &[String], width: u32) -> CmdResult {
    let doc = load_document(input)?;

    let requested: Vec<String> = if fonts.is_empty() {
        SPECIMEN_FONTS.iter().map(|s| s.to_string()).collect()
    } else {
        fonts.to_vec()
    };

    println!("Testing {} fonts...\n", requested.len());

    let mut candidates = Vec::new();
    for name in requested {
        match Typeface::load(&name) {
            Ok(typeface) => candidates.push((name, typeface)),
            Err(e) => println!("{} {}: {}", "✗".red(), name, e),
        }
    }

    fs::create_dir_all(output)?;
    for (name, image) in raster::specimen(&doc, &candidates, &SheetStyle::specimen(), width) {
        let path = output.join(specimen_file_name(&name));
        match image.save_png(&path) {
            Ok(()) => println!(
                "{} {:<20} → {} ({}x{})",
                "✓".green(),
                name,
                path.display(),
                image.width,
                image.height
            ),
            Err(e) => println!("{} {}: {}", "✗".red(), name, e),
        }
    }

    println!("\n{} {}", "Specimens saved to".green().bold(), output.display());

    Ok(())
}

fn cmd_metrics(layout: &LayoutArgs) -> CmdResult {
    let options = layout.to_options();
    options.validate()?;
    let metrics = LayoutMetrics::derive(&options);

    println!("{}", "Layout Metrics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}px", "Width".bold(), metrics.pixel_width);
    println!("{}: {}px", "Padding".bold(), metrics.padding_px);
    println!("{}: {}", "Characters".bold(), metrics.chars_per_line);
    println!("{}: {}px", "Font size".bold(), metrics.font_size_px);
    println!("{}: {}px", "Line pitch".bold(), metrics.line_pitch_px);
    println!(
        "{}: {} / {}",
        "Columns".bold(),
        options.key_column_width,
        options.description_column_width()
    );

    Ok(())
}

fn cmd_info(input: &Path, layout: &LayoutArgs) -> CmdResult {
    let doc = load_document(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.title());
    if let Some(url) = doc.source_url() {
        println!("{}: {}", "Source".bold(), url);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), doc.sections.len());
    println!("{}: {}", "Hotkeys".bold(), doc.hotkey_count());

    let pages = keysheet::text_pages(&doc, &layout.to_options())?;
    let lines: usize = pages.iter().map(|p| p.line_count()).sum();
    println!("{}: {}", "Pages".bold(), pages.len());
    println!("{}: {}", "Lines".bold(), lines);

    print_sections(&doc);

    Ok(())
}

fn print_sections(doc: &CheatsheetDocument) {
    if doc.sections.is_empty() {
        return;
    }
    println!();
    let last = doc.sections.len() - 1;
    for (i, section) in doc.sections.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!(
            "  {} {} ({})",
            branch.dimmed(),
            section.name,
            section.hotkeys.len()
        );
    }
}

fn cmd_version() {
    println!("{} {}", "keysheet".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Thermal printer cheatsheet generator");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Layout arguments built from the library defaults, independent of `KEYSHEET_*`.
    fn library_layout() -> LayoutArgs {
        let defaults = RenderOptions::default();
        LayoutArgs {
            width: defaults.pixel_width,
            padding: defaults.padding_px,
            chars: defaults.chars_per_line,
            key_column: defaults.key_column_width,
            max_lines: defaults.max_lines,
            min_lines: defaults.min_lines_before_break,
            font: defaults.font_family,
            char_ratio: defaults.char_width_ratio,
            line_height: defaults.line_height,
            sequential: false,
        }
    }

    /// Default declared on the flag itself, before any environment lookup.
    fn declared_default(id: &str) -> String {
        let cmd = LayoutArgs::augment_args(clap::Command::new("keysheet"));
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == id)
            .unwrap_or_else(|| panic!("no flag {}", id));
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn test_layout_defaults_match_library() {
        let defaults = RenderOptions::default();
        assert_eq!(declared_default("width"), defaults.pixel_width.to_string());
        assert_eq!(declared_default("padding"), defaults.padding_px.to_string());
        assert_eq!(declared_default("chars"), defaults.chars_per_line.to_string());
        assert_eq!(declared_default("key_column"), defaults.key_column_width.to_string());
        assert_eq!(declared_default("max_lines"), defaults.max_lines.to_string());
        assert_eq!(
            declared_default("min_lines"),
            defaults.min_lines_before_break.to_string()
        );
        assert_eq!(declared_default("font"), defaults.font_family);
        assert_eq!(declared_default("char_ratio"), defaults.char_width_ratio.to_string());
        assert_eq!(declared_default("line_height"), defaults.line_height.to_string());

        let options = library_layout().to_options();
        assert_eq!(options.chars_per_line, defaults.chars_per_line);
        assert!(options.parallel);
    }

    #[test]
    fn test_parse_metrics_flags() {
        let cli = Cli::try_parse_from([
            "keysheet",
            "metrics",
            "--width",
            "576",
            "--chars",
            "48",
            "--sequential",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Metrics { layout }) => {
                let options = layout.to_options();
                assert_eq!(options.pixel_width, 576);
                assert_eq!(options.chars_per_line, 48);
                assert!(!options.parallel);
            }
            _ => panic!("expected metrics command"),
        }
    }

    #[test]
    fn test_build_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("vim.toml");
        fs::write(
            &input,
            "[metadata]\ntitle = \"Vim\"\n\n[[sections]]\nname = \"Motion\"\n\n\
             [[sections.hotkeys]]\nkeys = \"Ctrl + D\"\ndescription = \"Half page down\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("broken.toml"), "[[sections]\n").unwrap();

        let out = dir.path().join("out");
        let layout = library_layout();
        cmd_build(&[dir.path().to_path_buf()], &out, true, true, &layout).unwrap();

        assert!(out.join("vim.txt").exists());
        assert!(out.join("vim.md").exists());
        assert!(out.join("vim.json").exists());
        assert!(!out.join("vim.png").exists());
        assert!(!out.join("broken.txt").exists());
    }
}
