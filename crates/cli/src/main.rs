use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use indexmap::IndexMap;
use log::{debug, info, warn};
use rust_forms_core::argument_spec::ProgramDefinition;
use rust_forms_core::config;
use rust_forms_core::error::Result;
use rust_forms_core::file_handling::{self, LastValues};
use rust_forms_core::form::Form;
use rust_forms_core::toolkit::memory::MemoryToolkit;
use rust_forms_core::toolkit::LayoutNode;

use rust_forms_cli::cli_args::Args;
use rust_forms_cli::presets::parse_presets;
use rust_forms_cli::prompting::{confirm_command_line, prompt_component, RunChoice};
use rust_forms_cli::rendering::{form_size, render_component};

/// Load the definition along with the values entered for it last time
fn initialize_config(args: &Args) -> Result<(ProgramDefinition, String, IndexMap<String, String>)> {
    let definition_path = config::get_definition_path(args.definition_path.as_deref());
    debug!("Definition path: `{}`", definition_path);

    let program = file_handling::get_program_definition(&definition_path)?;

    let last_values_path = config::get_last_values_path(args.last_values_path.as_deref());
    let last_values = match file_handling::get_last_values(&last_values_path)? {
        Some(last_values) if last_values.program == program.program => last_values.values,
        Some(_) => {
            info!("Last values at `{}` belong to another program, ignoring them", last_values_path);
            IndexMap::new()
        }
        None => IndexMap::new(),
    };

    Ok((program, last_values_path, last_values))
}

fn render_form<W: Write>(out: &mut W, form: &Form<'_>, layouts: &[LayoutNode]) -> Result<()> {
    for (component, layout) in form.components().iter().zip(layouts) {
        render_component(out, component, layout)?;
    }

    Ok(())
}

/// Ask for every value, then for confirmation, until the user settles.
///
/// Returns false if the user turned the command line down.
fn prompt_until_confirmed(args: &Args, form: &mut Form<'_>, layouts: &[LayoutNode]) -> Result<bool> {
    let mut input = stdin().lock();
    let mut out = stdout();

    loop {
        for (component, layout) in form.components_mut().iter_mut().zip(layouts) {
            render_component(&mut out, component, layout)?;
            prompt_component(&mut input, &mut out, component)?;
        }

        println!("Command line:\n{}", form.command_line()?);

        if args.force {
            return Ok(true);
        }

        match confirm_command_line(&mut input, &mut out)? {
            RunChoice::Yes => return Ok(true),
            RunChoice::No => return Ok(false),
            RunChoice::ChangeValues => {}
        }
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let (program, last_values_path, last_values) = initialize_config(&args)?;
    let presets = parse_presets(&program, &args.values)?;

    let mut form = Form::new(&program)?.with_options(args.serialize_options());
    let layouts = form.build(&mut MemoryToolkit)?;

    form.prefill(&last_values)?;
    form.prefill(&presets)?;
    form.reflow(form_size(args.width));

    if let Some(description) = &program.description {
        println!("{description}\n");
    }

    if args.dry_run {
        render_form(&mut stdout(), &form, &layouts)?;
        println!("Dry run is specified, not prompting for values.");
        println!("{}", form.command_line()?);
        return Ok(());
    }

    if !prompt_until_confirmed(&args, &mut form, &layouts)? {
        warn!("Command line was turned down, nothing saved");
        return Ok(());
    }

    if args.skip_value_save {
        info!("Skipping value save was specified. Not (over)writing last values.");
    } else {
        let last_values = LastValues {
            program: program.program.clone(),
            values: form.values()?,
        };
        file_handling::write_last_values(&last_values_path, &last_values)?;
    }

    println!("{}", form.command_line()?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
