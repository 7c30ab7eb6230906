use serde::Deserialize;
use tracing::{error, info};

mod service;

const APP_NAME: &str = "stock4me";

#[derive(Deserialize, Debug)]
struct Config {
    retrieval_url: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cfg = match envy::from_env::<Config>() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("unable to parse env variables: {err}");
            std::process::exit(1);
        }
    };

    info!("starting {APP_NAME} with retrieval_url={}...", cfg.retrieval_url);

    let retriever = service::stock::Retriever::new(cfg.retrieval_url);
    let value = retriever.get_stock_data();

    info!("got stock data {value} from {}", retriever.retrieval_url());
}

#[cfg(test)]
mod test {
    use crate::Config;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn config_from_env() {
        let cfg = envy::from_iter::<_, Config>(vars(&[
            ("RETRIEVAL_URL", "https://api.example.com/rates"),
            ("UNRELATED", "ignored"),
        ])).unwrap();

        assert_eq!(cfg.retrieval_url, "https://api.example.com/rates");
    }

    #[test]
    fn config_keeps_empty_url() {
        let cfg = envy::from_iter::<_, Config>(vars(&[("RETRIEVAL_URL", "")])).unwrap();
        assert_eq!(cfg.retrieval_url, "");
    }

    #[test]
    fn config_requires_url() {
        let res = envy::from_iter::<_, Config>(vars(&[("TG_TOKEN", "x")]));
        assert!(res.is_err());
    }
}
