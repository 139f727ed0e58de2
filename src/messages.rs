//! User-facing messages returned in `{"message": ...}` bodies.

pub const WATCHLIST_NOT_FOUND: &str = "Lista não encontrada na base :/";
pub const DUPLICATE_WATCHLIST: &str = "Lista de mesmo name já salva na base :/";
pub const SAVE_FAILED: &str = "Não foi possível salvar nova lista :/";
pub const DUPLICATE_MOVIE: &str = "Filme já adicionado à lista :/";
pub const MOVIE_NOT_IN_WATCHLIST: &str = "Filme não encontrado na lista :/";
pub const WATCHLIST_REMOVED: &str = "Lista removida";
pub const EXTERNAL_SERVICE_FAILED: &str = "Falha ao consultar serviço externo :/";
pub const INTERNAL_FAILURE: &str = "Erro interno do servidor :/";
