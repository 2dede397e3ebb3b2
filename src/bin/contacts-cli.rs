use clap::{Args, Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "contacts-cli")]
#[command(about = "Command line client for the contacts API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts with optional filter, sort and paging
    List(ListArgs),
    /// Show a single contact
    Get { id: u64 },
    /// Create a contact
    Create(ContactArgs),
    /// Update the given fields of a contact
    Update {
        id: u64,
        #[command(flatten)]
        fields: ContactArgs,
    },
    /// Delete a contact
    Delete { id: u64 },
}

#[derive(Args)]
struct ListArgs {
    #[arg(long)]
    sort: Option<String>,
    #[arg(long)]
    direction: Option<String>,
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    size: Option<u32>,
    /// Filter as FIELD OPERATOR VALUE, e.g. `--filter email contains example`
    #[arg(long, num_args = 3, value_names = ["FIELD", "OPERATOR", "VALUE"])]
    filter: Option<Vec<String>>,
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    fname: Option<String>,
    #[arg(long)]
    lname: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Birthday as YYYY-MM-DD
    #[arg(long)]
    birthday: Option<String>,
}

impl ContactArgs {
    fn to_body(&self) -> Value {
        let mut body = Map::new();
        let fields = [
            ("fname", &self.fname),
            ("lname", &self.lname),
            ("email", &self.email),
            ("birthday", &self.birthday),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                body.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(body)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // Redirects are reported, not followed, so the new location is visible.
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List(args) => {
            let mut query: Vec<(&str, String)> = Vec::new();
            if let Some(sort) = args.sort {
                query.push(("sort", sort));
            }
            if let Some(direction) = args.direction {
                query.push(("direction", direction));
            }
            if let Some(page) = args.page {
                query.push(("page", page.to_string()));
            }
            if let Some(size) = args.size {
                query.push(("size", size.to_string()));
            }

            let mut headers = HeaderMap::new();
            if let Some(filter) = args.filter {
                for (name, value) in ["X-Filter-By", "X-Filter-Operator", "X-Filter-Value"]
                    .into_iter()
                    .zip(filter)
                {
                    headers.insert(name, HeaderValue::from_str(&value)?);
                }
            }

            client
                .get(format!("{base}/contacts"))
                .query(&query)
                .headers(headers)
                .send()
                .await?
        }
        Commands::Get { id } => client.get(format!("{base}/contacts/{id}")).send().await?,
        Commands::Create(fields) => {
            client
                .post(format!("{base}/contacts"))
                .json(&fields.to_body())
                .send()
                .await?
        }
        Commands::Update { id, fields } => {
            client
                .put(format!("{base}/contacts/{id}"))
                .json(&fields.to_body())
                .send()
                .await?
        }
        Commands::Delete { id } => client.delete(format!("{base}/contacts/{id}")).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Status: {}", status);

    for name in ["x-page-total", "x-page-next", "x-page-prev"] {
        if let Some(value) = res.headers().get(name) {
            println!("{}: {}", name, value.to_str().unwrap_or_default());
        }
    }
    if status.is_redirection() {
        if let Some(location) = res.headers().get(LOCATION) {
            println!("Location: {}", location.to_str().unwrap_or_default());
        }
        return Ok(());
    }

    let text = res.text().await?;
    if text.is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    if !status.is_success() {
        eprintln!("Error: contacts API returned status {}", status);
    }
    Ok(())
}
