//! Terminal frontend for the book catalog.
//!
//! One possible UI among several: the whole client contract lives in
//! `book-core`, and this binary only executes the requests the core builds
//! (via ureq) and renders the resulting `CatalogView` as plain text. Search,
//! sort, and pagination all happen client-side over the full fetched set.

use anyhow::{bail, Context};
use book_core::{
    ApiError, BookClient, BookInput, CatalogView, Draft, HttpMethod, HttpRequest, HttpResponse,
    SortKey,
};
use clap::{Parser, Subcommand, ValueEnum};

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "book-cli", version, about = "Manage a running book catalog server")]
struct Cli {
    /// Server base URL; falls back to $BOOKS_SERVER, then localhost:3000
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the catalog, one page at a time
    List {
        /// Case-insensitive match against title and author
        #[arg(long)]
        search: Option<String>,

        /// Sort the listing, ascending
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Add a new book
    Add { title: String, author: String },
    /// Replace an existing book's title and author
    Update { id: i64, title: String, author: String },
    /// Remove a book; succeeds even if the id is unknown
    Remove { id: i64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Title,
    Author,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Author => SortKey::Author,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let base_url = cli
        .server
        .clone()
        .or_else(|| std::env::var("BOOKS_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let client = BookClient::new(&base_url);

    match cli.command {
        Commands::List { search, sort, page } => list(&client, search, sort, page),
        Commands::Add { title, author } => add(&client, title, author),
        Commands::Update { id, title, author } => update(&client, id, title, author),
        Commands::Remove { id } => remove(&client, id),
    }
}

/// Execute a core-built request with ureq. Status interpretation stays in
/// the core; only transport failures surface here.
fn execute(req: HttpRequest) -> anyhow::Result<HttpResponse> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let path = req.path.clone();
    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .with_context(|| format!("request to {path} failed"))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn list(
    client: &BookClient,
    search: Option<String>,
    sort: Option<SortArg>,
    page: usize,
) -> anyhow::Result<()> {
    let books = client.parse_list_books(execute(client.build_list_books())?)?;

    let mut view = CatalogView::new();
    view.set_books(books);
    if let Some(query) = search {
        view.set_query(query);
    }
    view.set_sort_key(sort.map(Into::into));
    view.set_page(page.saturating_sub(1));

    let rows = view.visible();
    if rows.is_empty() {
        println!("no books match");
    } else {
        for book in &rows {
            println!("{:>15}  {} by {}", book.id, book.title, book.author);
        }
    }
    println!(
        "page {}/{} ({} of {} books)",
        view.page() + 1,
        view.page_count(),
        view.match_count(),
        view.books().len()
    );
    Ok(())
}

fn add(client: &BookClient, title: String, author: String) -> anyhow::Result<()> {
    let draft = Draft {
        title,
        author,
        editing: None,
    };
    if !draft.is_valid() {
        bail!("title and author must not be blank");
    }
    let input = BookInput {
        title: draft.title,
        author: draft.author,
    };
    let created = client.parse_create_book(execute(client.build_create_book(&input)?)?)?;
    println!("added {} by {} (id {})", created.title, created.author, created.id);
    Ok(())
}

fn update(client: &BookClient, id: i64, title: String, author: String) -> anyhow::Result<()> {
    let draft = Draft {
        title,
        author,
        editing: Some(id),
    };
    if !draft.is_valid() {
        bail!("title and author must not be blank");
    }
    let input = BookInput {
        title: draft.title,
        author: draft.author,
    };
    let updated = match client.parse_update_book(execute(client.build_update_book(id, &input)?)?) {
        Ok(book) => book,
        Err(ApiError::NotFound) => bail!("book {id} not found"),
        Err(err) => return Err(err.into()),
    };
    println!("updated {} by {} (id {})", updated.title, updated.author, updated.id);
    Ok(())
}

fn remove(client: &BookClient, id: i64) -> anyhow::Result<()> {
    let message = client.parse_delete_book(execute(client.build_delete_book(id))?)?;
    println!("{message}");
    Ok(())
}
