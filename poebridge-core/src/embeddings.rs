//! Embedding model contract
//!
//! A pure capability contract, no algorithm: implementors map documents and
//! queries to fixed-width vectors. The async variants default to
//! "not supported" so synchronous-only implementations stay minimal.

use crate::error::{PoeError, PoeResult};
use async_trait::async_trait;

/// Interface for embedding models
#[async_trait]
pub trait Embeddings: Send + Sync {
    /// Embed search documents, one vector per document
    fn embed_documents(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;

    /// Embed a query
    fn embed_query(&self, text: &str) -> anyhow::Result<Vec<f32>>;

    /// Embed search documents without blocking; override to support
    async fn embed_documents_async(&self, _texts: &[String]) -> PoeResult<Vec<Vec<f32>>> {
        Err(PoeError::NotSupported(
            "async document embedding".to_string(),
        ))
    }

    /// Embed a query without blocking; override to support
    async fn embed_query_async(&self, _text: &str) -> PoeResult<Vec<f32>> {
        Err(PoeError::NotSupported("async query embedding".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(usize);

    impl Embeddings for Constant {
        fn embed_documents(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![0.0; self.0]).collect())
        }

        fn embed_query(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            Ok(vec![0.0; self.0])
        }
    }

    #[test]
    fn one_vector_per_document() {
        let provider = Constant(4);
        let vectors = provider
            .embed_documents(&["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.len() == 4));
    }

    #[tokio::test]
    async fn async_variants_default_to_not_supported() {
        let provider = Constant(4);
        assert!(matches!(
            provider.embed_query_async("q").await,
            Err(PoeError::NotSupported(_))
        ));
        assert!(matches!(
            provider.embed_documents_async(&[]).await,
            Err(PoeError::NotSupported(_))
        ));
    }
}
