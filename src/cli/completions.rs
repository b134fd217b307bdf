use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    compforge completions bash > ~/.bash_completion.d/compforge\n\n\
                  Generate zsh completions:\n    compforge completions zsh > ~/.zfunc/_compforge\n\n\
                  Generate fish completions:\n    compforge completions fish > ~/.config/fish/completions/compforge.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
