use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// List the searchable fields the caller may use
    Fields,

    /// List the report types the caller may select
    ReportTypes,

    /// Decode and validate a form document
    Validate {
        #[arg(long, help = "Path to the form document (JSON)")]
        form: String,
    },

    /// Print a human readable summary of a form's expression
    Describe {
        #[arg(long, help = "Path to the form document (JSON)")]
        form: String,
    },

    /// Compile a form into a parameterized SQL query
    Compile {
        #[arg(long, help = "Path to the form document (JSON)")]
        form: String,

        #[arg(long, value_enum, default_value_t = DialectKind::Postgres, help = "SQL dialect to render")]
        dialect: DialectKind,

        #[arg(long, default_value = "records", help = "Table the query selects from")]
        table: String,

        #[arg(long, help = "Maximum number of rows to return")]
        limit: Option<usize>,

        #[arg(long, help = "Print the compiled predicate as JSON as well")]
        predicate: bool,
    },

    /// Run a form over a JSON array of records
    Search {
        #[arg(long, help = "Path to the form document (JSON)")]
        form: String,

        #[arg(long, help = "Path to a JSON array of flat record objects")]
        data: String,

        #[arg(long, help = "Maximum number of matching records to print")]
        limit: Option<usize>,

        #[arg(long, help = "Write the matches to this file instead of stdout")]
        output: Option<String>,
    },

    /// Manage saved search forms
    #[command(subcommand)]
    Forms(FormCommands),
}

#[derive(Subcommand)]
pub enum FormCommands {
    /// Save a form document under a name
    Save {
        #[arg(long, help = "Name to save the form under")]
        name: String,

        #[arg(long, help = "Path to the form document (JSON)")]
        form: String,

        #[arg(long, help = "Make the form visible to every user")]
        public: bool,

        #[arg(long, help = "Replace an existing form of the same name")]
        overwrite: bool,
    },

    /// Load a saved form and print its document
    Load {
        #[arg(long, help = "Name of the form")]
        name: String,

        #[arg(long, help = "Write the document to this file instead of stdout")]
        output: Option<String>,
    },

    /// List the names of the forms visible to the caller
    List {
        #[arg(long, help = "Only list public forms")]
        public_only: bool,
    },

    /// Delete one of the caller's forms
    Delete {
        #[arg(long, help = "Name of the form")]
        name: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialectKind {
    Postgres,
    Mysql,
}
