use simple_graph::GraphJob;
use simple_graph::render::render_svg;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Json,
    #[cfg(feature = "cairo-backend")]
    Png,
}

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: Option<PathBuf>,
    format: OutputFormat,
}

fn main() {
    let _ = simple_graph::telemetry::init_default_tracing("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!(
            "failed to read job `{}`: {err}",
            args.input_path.display()
        )
    })?;
    let job = GraphJob::from_json_str(&raw).map_err(|err| err.to_string())?;
    let frame = job.build();

    let bytes = match args.format {
        OutputFormat::Svg => render_svg(&frame)
            .map_err(|err| format!("{} chart svg render failed: {err}", job.kind_name()))?
            .into_bytes(),
        OutputFormat::Json => frame
            .to_json_pretty()
            .map_err(|err| err.to_string())?
            .into_bytes(),
        #[cfg(feature = "cairo-backend")]
        OutputFormat::Png => render_png(&frame)?,
    };

    match &args.output_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|err| {
                    format!("failed to create output dir `{}`: {err}", parent.display())
                })?;
            }
            fs::write(path, &bytes)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            eprintln!(
                "rendered {} chart ({}x{}) -> {}",
                job.kind_name(),
                frame.viewport.width,
                frame.viewport.height,
                path.display()
            );
        }
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(&bytes)
                .map_err(|err| format!("failed to write stdout: {err}"))?;
        }
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn render_png(frame: &simple_graph::render::RenderFrame) -> Result<Vec<u8>, String> {
    use simple_graph::render::{CairoRenderer, Renderer};

    let mut renderer = CairoRenderer::for_frame(frame).map_err(|err| err.to_string())?;
    renderer.render(frame).map_err(|err| err.to_string())?;
    let mut bytes = Vec::new();
    renderer
        .write_png(&mut bytes)
        .map_err(|err| err.to_string())?;
    Ok(bytes)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut format: Option<OutputFormat> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" | "-o" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --format".to_owned())?;
                format = Some(parse_format(&value)?);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    let format = format
        .or_else(|| output_path.as_ref().and_then(|path| format_from_extension(path)))
        .unwrap_or(OutputFormat::Svg);

    Ok(CliArgs {
        input_path,
        output_path,
        format,
    })
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    match value {
        "svg" => Ok(OutputFormat::Svg),
        "json" => Ok(OutputFormat::Json),
        #[cfg(feature = "cairo-backend")]
        "png" => Ok(OutputFormat::Png),
        other => Err(format!("unsupported format `{other}`")),
    }
}

fn format_from_extension(path: &std::path::Path) -> Option<OutputFormat> {
    let extension = path.extension()?.to_str()?;
    parse_format(&extension.to_ascii_lowercase()).ok()
}

fn usage_message() -> String {
    "Usage: render_graph --input <job.json> [options]\n\nOptions:\n  -i, --input <path>     Graph job JSON (line, bar or scatter)\n  -o, --output <path>    Output file (default: stdout)\n  --format <fmt>         svg | json | png with `cairo-backend` (default: from extension, else svg)\n  -h, --help             Show this message"
        .to_owned()
}
