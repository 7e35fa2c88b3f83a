use crate::core::{verbs, Status};
use crate::error::ExecuteError;
use crate::fs::{self, CommandRenderer, Renderer};
use derivative::Derivative;
use error_stack::{Context, IntoReport, Report, Result};
use std::io::{self, Write};
use termcolor::Color;

mod config;
pub use config::*;

/// Render a syntax tree with the given config
///
/// This is the main entry point for rendering. It takes a [`Config`] and runs the renderer.
/// If an error occurs, it will be printed to stderr and the function will return [`Err`].
///
/// If you want to retrieve the error object instead of printing it, use [`Render::run`].
pub fn render(config: Config) -> std::result::Result<(), ExecuteError> {
    match Render::run(config) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{:?}", e);
            Err(ExecuteError)
        }
    }
}

/// The runtime state when rendering a syntax tree
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Render {
    /// The Config
    config: Config,
    /// The collaborator producing source text
    #[derivative(Debug = "ignore")]
    renderer: Box<dyn Renderer>,
    /// The status printer
    status: Status,
}

impl Render {
    /// Internal run function
    ///
    /// This is what [`render`] calls internally. The difference is that this function
    /// returns the error instead of printing it.
    pub fn run(config: Config) -> Result<(), ExecuteError> {
        log::info!("creating renderer");
        log::debug!("using config: {:?}", config);

        let renderer = CommandRenderer::new(&config.renderer_cmd).map_err(|e| {
            e.change_context(ExecuteError).attach_printable(format!(
                "cannot resolve renderer command: {cmd}",
                cmd = config.renderer_cmd
            ))
        })?;
        let using = renderer.to_string();

        let mut runtime = Self::with_renderer(config, renderer);
        let _ = runtime
            .status
            .print_status(verbs::USING, &using, Color::Yellow, true);
        runtime.execute()
    }

    /// Create the runtime with any [`Renderer`]
    pub fn with_renderer<R>(config: Config, renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        Self {
            status: Status::new(config.verbosity),
            config,
            renderer: Box::new(renderer),
        }
    }

    /// Read the tree, render it and write the result
    pub fn execute(mut self) -> Result<(), ExecuteError> {
        let input = self.config.input.display().to_string();
        let _ = self
            .status
            .print_status(verbs::READING, &input, Color::Yellow, true);
        let tree = match fs::read_tree(&self.config.input) {
            Ok(tree) => tree,
            Err(e) => return Err(self.fail(e, "cannot read syntax tree")),
        };

        let _ = self
            .status
            .print_status(verbs::RENDERING, &input, Color::Green, false);
        log::info!("rendering {input}");
        let source = match self.renderer.render(&tree) {
            Ok(source) => source,
            Err(e) => return Err(self.fail(e, "cannot render syntax tree")),
        };

        let written = match &self.config.output {
            Some(output) => {
                let _ = self.status.print_status(
                    verbs::WRITING,
                    &output.display().to_string(),
                    Color::Yellow,
                    true,
                );
                fs::write_output(output, &source)
                    .map_err(|e| e.change_context(ExecuteError))
            }
            None => io::stdout()
                .lock()
                .write_all(source.as_bytes())
                .into_report()
                .map_err(|e| {
                    e.change_context(ExecuteError)
                        .attach_printable("cannot write to stdout")
                }),
        };
        if let Err(e) = written {
            return Err(self.fail(e, "cannot write rendered source"));
        }

        let _ = self
            .status
            .print_status(verbs::DONE, &input, Color::Green, false);
        log::info!("rendering {input} done");
        Ok(())
    }

    fn fail<C>(&mut self, e: Report<C>, message: &'static str) -> Report<ExecuteError>
    where
        C: Context,
    {
        let _ = self
            .status
            .print_status(verbs::FAILED, message, Color::Red, false);
        e.change_context(ExecuteError).attach_printable(message)
    }
}
