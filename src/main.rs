// src/main.rs
//
// Calculatrice d'aires — point d'entrée console
// ---------------------------------------------
// Sous-commandes:
// - aires      : un programme [[codes],[a],[b],[h]] (argument ou stdin), aires ligne par ligne
// - formule    : sqrt(|cos x|^n + exp(n³)/ln x + |sin x|^(1/n))
// - interactif : un programme par ligne, commandes ':q', ':clr', ':chiffres N', ...
//
// Journalisation: stderr (RUST_LOG), stdout reste réservé aux résultats.

use std::io::{self, BufRead, Read, Write};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;

use calculatrice_aires::app::{SessionAires, Suite};
use calculatrice_aires::noyau::evaluer_formule;

/// Titre unique (bannière du mode interactif).
const TITRE_APP: &str = "Calculatrice d'aires";

const EXEMPLE: &str = "[['S','T','P','T','E'],[2,3,4,5,0],[0,7,6,8,0],[0,4,3,2,0]]";

#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help(true))]
enum Args {
    /// Évalue un programme de figures et affiche une aire par ligne.
    Aires {
        /// Littéral [[codes],[a...],[b...],[h...]] ; lu sur stdin si absent.
        programme: Option<String>,
        /// Nombre de décimales (forme courte si absent).
        #[arg(short, long)]
        chiffres: Option<usize>,
        /// Affiche aussi la démarche (jetons, codes, arrêt, opérations).
        #[arg(short, long)]
        demarche: bool,
    },
    /// Évalue la formule scalaire à domaine contrôlé.
    Formule {
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,
        #[arg(short, long, allow_negative_numbers = true)]
        n: f64,
    },
    /// Un programme par ligne sur stdin (':q' pour quitter).
    Interactif {
        #[arg(short, long)]
        chiffres: Option<usize>,
    },
}

fn installer_journal() {
    let filtre = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn lire_stdin() -> anyhow::Result<String> {
    let mut s = String::new();
    io::stdin()
        .read_to_string(&mut s)
        .context("lecture de stdin impossible")?;
    Ok(s)
}

fn cmd_aires(
    programme: Option<String>,
    chiffres: Option<usize>,
    demarche: bool,
) -> anyhow::Result<()> {
    let texte = match programme {
        Some(p) => p,
        None => lire_stdin()?,
    };

    let mut session = SessionAires::new(chiffres, demarche);
    session.entree = texte;
    session.eval_via_noyau();

    if !session.erreur.is_empty() {
        bail!("{}", session.erreur);
    }
    print!("{}", session.rendu());
    Ok(())
}

fn cmd_formule(x: f64, n: f64) -> anyhow::Result<()> {
    let r = evaluer_formule(x, n).with_context(|| format!("formule (x = {x}, n = {n})"))?;
    println!("{r:?}");
    Ok(())
}

fn cmd_interactif(chiffres: Option<usize>) -> anyhow::Result<()> {
    let mut session = SessionAires::new(chiffres, false);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{TITRE_APP} — un programme par ligne, ':q' pour quitter")?;
    writeln!(out, "Ex: {EXEMPLE}")?;
    out.flush()?;

    for ligne in io::stdin().lock().lines() {
        let ligne = ligne.context("lecture de stdin impossible")?;
        match session.traiter_ligne(&ligne) {
            Suite::Quitter => break,
            Suite::Silence => {}
            Suite::Afficher => write!(out, "{}", session.rendu())?,
        }
        out.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    installer_journal();

    let args = Args::parse();
    debug!(?args, "démarrage");

    match args {
        Args::Aires {
            programme,
            chiffres,
            demarche,
        } => cmd_aires(programme, chiffres, demarche),
        Args::Formule { x, n } => cmd_formule(x, n),
        Args::Interactif { chiffres } => cmd_interactif(chiffres),
    }
}
