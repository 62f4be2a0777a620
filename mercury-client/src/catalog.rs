//! Request catalog: one factory per Mercury resource.
//!
//! Every factory is a pure function of its arguments. It knows the URI shape
//! of its resource and the strategy decoding the response, performs no I/O
//! and cannot fail. Arguments are substituted into URI templates literally,
//! without any escaping.
//!
//! | Resource | Result |
//! |---|---|
//! | [`get_root_playlists`], [`get_playlist`] | [`SelectedListContent`] |
//! | [`get_playlist_annotation`] | [`PlaylistAnnotation`] |
//! | [`get_track`], [`get_artist`], [`get_album`], [`get_episode`], [`get_show`] | metadata message |
//! | [`multi_get`] | [`MercuryMultiGetReply`] |
//! | [`get_station_for`] | [`StationsView`] |
//! | [`autoplay_query`] | [`RawRequest`], decoded by the caller |
//! | [`resolve_context`] | [`ResolvedContextView`] |
//! | [`request_token`], [`get_generic_json`] | [`GenericDocument`] |

use mercury_core::RawRequest;
use mercury_core::proto::{
    Album, Artist, Episode, MercuryMultiGetReply, MercuryMultiGetRequest, MercuryRequest,
    PlaylistAnnotation, SelectedListContent, Show, Track,
};

use crate::id::{PlaylistUri, ToMercuryUri};
use crate::request::TypedRequest;
use crate::views::{GenericDocument, ResolvedContextView, StationsView};

/// Client id presented to keymaster when requesting access tokens.
///
/// Identifies the calling application class; it is not a secret.
pub const KEYMASTER_CLIENT_ID: &str = "65b708073fc0480ea92a077233ca87bd";

/// The playlists in a user's root list.
pub fn get_root_playlists(username: &str) -> TypedRequest<SelectedListContent> {
    debug_assert!(!username.is_empty(), "username must not be empty");
    TypedRequest::proto(RawRequest::get(format!(
        "hm://playlist/user/{username}/rootlist"
    )))
}

/// A playlist's description and picture.
pub fn get_playlist_annotation<I>(id: &I) -> TypedRequest<PlaylistAnnotation>
where
    I: PlaylistUri + ?Sized,
{
    TypedRequest::proto(RawRequest::get(id.to_annotation_uri()))
}

/// A playlist's contents.
pub fn get_playlist<I>(id: &I) -> TypedRequest<SelectedListContent>
where
    I: PlaylistUri + ?Sized,
{
    TypedRequest::proto(RawRequest::get(id.to_mercury_uri()))
}

pub fn get_track<I: ToMercuryUri + ?Sized>(id: &I) -> TypedRequest<Track> {
    TypedRequest::proto(RawRequest::get(id.to_mercury_uri()))
}

pub fn get_artist<I: ToMercuryUri + ?Sized>(id: &I) -> TypedRequest<Artist> {
    TypedRequest::proto(RawRequest::get(id.to_mercury_uri()))
}

pub fn get_album<I: ToMercuryUri + ?Sized>(id: &I) -> TypedRequest<Album> {
    TypedRequest::proto(RawRequest::get(id.to_mercury_uri()))
}

pub fn get_episode<I: ToMercuryUri + ?Sized>(id: &I) -> TypedRequest<Episode> {
    TypedRequest::proto(RawRequest::get(id.to_mercury_uri()))
}

pub fn get_show<I: ToMercuryUri + ?Sized>(id: &I) -> TypedRequest<Show> {
    TypedRequest::proto(RawRequest::get(id.to_mercury_uri()))
}

/// Batch several sub-requests into one call to `uri`.
///
/// The sub-requests are serialized in the order given, and the decoded
/// reply's `reply[i]` answers the `i`-th sub-request. Correlation is by
/// position only.
///
/// # Example
///
/// ```ignore
/// use mercury_client::catalog;
///
/// let batch = catalog::multi_get(
///     "hm://metadata/4/tracks",
///     [catalog::get_track(&a).raw().to_sub_request(), catalog::get_track(&b).raw().to_sub_request()],
/// );
///
/// let reply = batch.decode(&chunks)?;
/// assert_eq!(reply.reply.len(), 2);
/// ```
pub fn multi_get<S, I>(uri: S, subs: I) -> TypedRequest<MercuryMultiGetReply>
where
    S: Into<String>,
    I: IntoIterator<Item = MercuryRequest>,
{
    let batch = MercuryMultiGetRequest {
        request: subs.into_iter().collect(),
    };
    let raw = RawRequest::multi_get(uri, &batch);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        uri = %raw.uri(),
        sub_requests = batch.request.len(),
        "assembled mercury multi-get"
    );

    TypedRequest::proto(raw)
}

/// Radio station seeded from `context` (e.g. `spotify:album:...`).
pub fn get_station_for(context: &str) -> TypedRequest<StationsView> {
    TypedRequest::document(RawRequest::get(format!(
        "hm://radio-apollo/v3/stations/{context}"
    )))
}

/// Whether autoplay is enabled for `context`. The response is left to the caller.
pub fn autoplay_query(context: &str) -> RawRequest {
    RawRequest::get(format!("hm://autoplay-enabled/query?uri={context}"))
}

/// Resolve a context URI into its pages.
pub fn resolve_context(uri: &str) -> TypedRequest<ResolvedContextView> {
    TypedRequest::document(RawRequest::get(format!("hm://context-resolve/v1/{uri}")))
}

/// Request an access token for `scope` on behalf of `device_id`.
///
/// The response can be read with
/// [`GenericDocument::into_view::<TokenDocument>()`](GenericDocument::into_view).
pub fn request_token(device_id: &str, scope: &str) -> TypedRequest<GenericDocument> {
    TypedRequest::document(RawRequest::get(format!(
        "hm://keymaster/token/authenticated?scope={scope}&client_id={KEYMASTER_CLIENT_ID}&device_id={device_id}"
    )))
}

/// Fetch any URI whose response is a JSON document.
pub fn get_generic_json<S: Into<String>>(uri: S) -> TypedRequest<GenericDocument> {
    TypedRequest::document(RawRequest::get(uri))
}
