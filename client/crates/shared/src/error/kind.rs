//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every client crate.
//! HTTP failures are classified by status code; failures that never reached
//! the backend get their own kinds.

use serde::Serialize;

/// エラー種別の列挙体
///
/// バックエンドから返された HTTP ステータスコード、または
/// クライアント側で発生した失敗（通信・入力検証・ストレージ）を分類します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(404);
/// assert_eq!(kind, ErrorKind::NotFound);
/// assert_eq!(kind.status_code(), Some(404));
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストが不正
    BadRequest,
    /// 401 - Unauthorized: 認証が必要（トークン期限切れを含む）
    Unauthorized,
    /// 403 - Forbidden: アクセス権限なし
    Forbidden,
    /// 404 - Not Found: リソースが見つからない
    NotFound,
    /// 408 - Request Timeout: リクエストタイムアウト
    RequestTimeout,
    /// 409 - Conflict: 現在の状態と競合
    Conflict,
    /// 422 - Unprocessable Entity: 処理不可能なエンティティ
    UnprocessableEntity,
    /// 429 - Too Many Requests: レート制限超過
    TooManyRequests,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 503 - Service Unavailable: サービス利用不可
    ServiceUnavailable,
    /// その他の 4xx
    OtherClientError(u16),
    /// その他の 5xx
    OtherServerError(u16),
    /// 通信失敗（DNS、接続拒否など）: レスポンスなし
    Transport,
    /// 入力検証エラー: ネットワーク呼び出し前に検出
    Validation,
    /// 永続ストレージの読み書き失敗
    Storage,
}

impl ErrorKind {
    /// HTTP ステータスコードから種別を判定
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
    /// assert_eq!(ErrorKind::from_status(418), ErrorKind::OtherClientError(418));
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::OtherServerError(502));
    /// ```
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            500 => ErrorKind::InternalServerError,
            503 => ErrorKind::ServiceUnavailable,
            s if s >= 500 => ErrorKind::OtherServerError(s),
            s => ErrorKind::OtherClientError(s),
        }
    }

    /// HTTP ステータスコードを取得
    ///
    /// ## Returns
    /// レスポンスを伴わない種別（通信・検証・ストレージ）は `None`
    #[inline]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            ErrorKind::BadRequest => Some(400),
            ErrorKind::Unauthorized => Some(401),
            ErrorKind::Forbidden => Some(403),
            ErrorKind::NotFound => Some(404),
            ErrorKind::RequestTimeout => Some(408),
            ErrorKind::Conflict => Some(409),
            ErrorKind::UnprocessableEntity => Some(422),
            ErrorKind::TooManyRequests => Some(429),
            ErrorKind::InternalServerError => Some(500),
            ErrorKind::ServiceUnavailable => Some(503),
            ErrorKind::OtherClientError(s) | ErrorKind::OtherServerError(s) => Some(*s),
            ErrorKind::Transport | ErrorKind::Validation | ErrorKind::Storage => None,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.as_str(), "Bad Request");
    /// assert_eq!(ErrorKind::Transport.as_str(), "Network Error");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::OtherClientError(_) => "Client Error",
            ErrorKind::OtherServerError(_) => "Server Error",
            ErrorKind::Transport => "Network Error",
            ErrorKind::Validation => "Validation Error",
            ErrorKind::Storage => "Storage Error",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーは `error` レベルでログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(code) if code >= 500)
    }

    /// クライアント側のエラーかどうかを判定
    ///
    /// 4xx系のエラーは `true` を返します。
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(code) if code >= 400 && code < 500)
    }

    /// 認証・認可の拒否かどうか（401 / 403）
    #[inline]
    pub const fn is_auth_rejection(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized | ErrorKind::Forbidden)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
