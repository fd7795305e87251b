use clap::Parser;
use damping_explorer::cli::args::{CommandsEnum, ExplorerArgs, ParameterFilePath};
use damping_explorer::cli::export::export_response_csv;
use damping_explorer::cli::render::render_response_chart;
use damping_explorer::core::file_io::FilePrefix;
use damping_explorer::core::scenario::load_scenario_params;

fn main() {
    env_logger::init();

    let args: ExplorerArgs = ExplorerArgs::parse();

    let build_file_prefix = |params: &ParameterFilePath, command: &str| -> FilePrefix {
        FilePrefix::build(&params.params_path, command, params.date_time_out)
    };

    match &args.command {
        Some(CommandsEnum::Render(params)) => {
            let scenario = load_scenario_params(&params.params_path).unwrap();
            render_response_chart(&scenario, build_file_prefix(params, "render")).unwrap();
        }

        Some(CommandsEnum::Export(params)) => {
            let scenario = load_scenario_params(&params.params_path).unwrap();
            export_response_csv(&scenario, build_file_prefix(params, "export")).unwrap();
        }

        None => {
            println!("No command specified -- try `--help`.");
        }
    }
}
