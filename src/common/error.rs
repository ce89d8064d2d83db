// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Quantidade inválida: {0} (mínimo 1)")]
    InvalidQuantity(i32),

    #[error("Preço unitário inválido: {0} (não pode ser negativo)")]
    InvalidUnitPrice(Decimal),

    #[error("Valor inválido: {0} (não pode ser negativo)")]
    InvalidAmount(Decimal),

    #[error("Booking não encontrado")]
    BookingNotFound,

    #[error("Serviço não encontrado")]
    ServiceNotFound,

    #[error("Item do booking não encontrado")]
    BookingItemNotFound,

    #[error("Faxineiro não encontrado")]
    CleanerNotFound,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Pagamento não encontrado")]
    PaymentNotFound,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Código já existe")]
    CodeAlreadyExists,

    #[error("Booking já possui avaliação")]
    RatingAlreadyExists,

    #[error("Faxineiro não está ativo")]
    CleanerNotActive,

    // O recálculo do total falhou no meio da transação; a mutação do
    // item precisa ser desfeita junto, nunca deixar um total velho.
    #[error("Falha de consistência ao recalcular o total do booking {0}")]
    TotalRecomputeFailed(Uuid),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::InvalidQuantity(q) => {
                let body = Json(json!({
                    "error": format!("Quantidade deve ser no mínimo 1 (recebido: {q}).")
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidUnitPrice(p) => {
                let body = Json(json!({
                    "error": format!("Preço unitário não pode ser negativo (recebido: {p}).")
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidAmount(a) => {
                let body = Json(json!({
                    "error": format!("Valor não pode ser negativo (recebido: {a}).")
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::BookingNotFound => (StatusCode::NOT_FOUND, "Booking não encontrado."),
            AppError::ServiceNotFound => (StatusCode::NOT_FOUND, "Serviço não encontrado."),
            AppError::BookingItemNotFound => {
                (StatusCode::NOT_FOUND, "Item do booking não encontrado.")
            }
            AppError::CleanerNotFound => (StatusCode::NOT_FOUND, "Faxineiro não encontrado."),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AppError::PaymentNotFound => (StatusCode::NOT_FOUND, "Pagamento não encontrado."),

            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso."),
            AppError::CodeAlreadyExists => (StatusCode::CONFLICT, "Este código já está em uso."),
            AppError::RatingAlreadyExists => {
                (StatusCode::CONFLICT, "Este booking já foi avaliado.")
            }
            AppError::CleanerNotActive => (
                StatusCode::CONFLICT,
                "Faxineiro inativo ou de licença não pode ser atribuído.",
            ),

            // Todos os outros erros (TotalRecomputeFailed, DatabaseError,
            // InternalServerError) viram 500. O `tracing` loga a mensagem
            // detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// Converte violação de UNIQUE (23505) na variante de conflito indicada;
/// qualquer outro erro segue como `DatabaseError`.
pub(crate) fn map_unique_violation(err: sqlx::Error, conflict: AppError) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            return conflict;
        }
    }
    AppError::DatabaseError(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    // Erro de banco sintético com código SQLSTATE controlado, só para
    // exercitar o mapeamento sem um Postgres de verdade.
    #[derive(Debug)]
    struct FakePgError {
        code: &'static str,
    }

    impl fmt::Display for FakePgError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "erro de banco (SQLSTATE {})", self.code)
        }
    }

    impl StdError for FakePgError {}

    impl sqlx::error::DatabaseError for FakePgError {
        fn message(&self) -> &str {
            "erro de banco"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            if self.code == "23505" {
                sqlx::error::ErrorKind::UniqueViolation
            } else {
                sqlx::error::ErrorKind::Other
            }
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakePgError { code }))
    }

    #[test]
    fn unique_violation_becomes_the_given_conflict() {
        let mapped = map_unique_violation(db_error("23505"), AppError::RatingAlreadyExists);
        assert!(matches!(mapped, AppError::RatingAlreadyExists));

        let mapped = map_unique_violation(db_error("23505"), AppError::EmailAlreadyExists);
        assert!(matches!(mapped, AppError::EmailAlreadyExists));
    }

    #[test]
    fn other_sqlstates_stay_database_errors() {
        // 23503 = violação de FK; não é conflito de unicidade
        let mapped = map_unique_violation(db_error("23503"), AppError::RatingAlreadyExists);
        assert!(matches!(mapped, AppError::DatabaseError(_)));
    }

    #[test]
    fn non_database_errors_stay_database_errors() {
        let mapped = map_unique_violation(sqlx::Error::RowNotFound, AppError::CodeAlreadyExists);
        assert!(matches!(
            mapped,
            AppError::DatabaseError(sqlx::Error::RowNotFound)
        ));
    }
}
