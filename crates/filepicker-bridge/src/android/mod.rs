// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Both the chooser launch and every resolver
// lookup go through JNI calls into the ART runtime.
//
// ## Result delivery
//
// `startActivityForResult` is asynchronous: the chooser's outcome arrives in
// the host Activity's `onActivityResult`. The host forwards it with
//
// ```java
// @Override
// protected void onActivityResult(int requestCode, int resultCode, Intent data) {
//     super.onActivityResult(requestCode, resultCode, data);
//     FilePickerResultReceiver.nativeOnActivityResult(requestCode, resultCode, data);
// }
// ```
//
// where `dev.filepicker.bridge.FilePickerResultReceiver` declares
// `static native boolean nativeOnActivityResult(int, int, Intent)`. The
// request code picks the waiting callback out of [`PENDING_PICKS`].

#![cfg(target_os = "android")]

use std::sync::{LazyLock, OnceLock};

use jni::objects::{JClass, JObject, JObjectArray, JString, JValue};
use jni::sys::{jboolean, jint, jsize, JNI_FALSE, JNI_TRUE};
use jni::{JNIEnv, JavaVM};

use filepicker_core::error::{PickerError, Result};
use filepicker_core::types::ContentUri;

use crate::activity::{ActivityCallback, ActivityResult, ResultData, RESULT_OK};
use crate::intent::{ChooserRequest, EXTRA_ALLOW_MULTIPLE, EXTRA_MIME_TYPES};
use crate::registry::RequestRegistry;
use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// `OpenableColumns.DISPLAY_NAME`
const COLUMN_DISPLAY_NAME: &str = "_display_name";

/// `OpenableColumns.SIZE`
const COLUMN_SIZE: &str = "_size";

/// Local references a single bridge call may create before its frame is popped.
const LOCAL_FRAME_CAPACITY: i32 = 64;

/// Locals created per clip item: the item, its URI and the URI string.
const CLIP_ITEM_FRAME_CAPACITY: i32 = 4;

/// Picks waiting for `onActivityResult`, keyed by request code.
pub static PENDING_PICKS: LazyLock<RequestRegistry> = LazyLock::new(RequestRegistry::new);

static JAVA_VM: OnceLock<JavaVM> = OnceLock::new();

type Env = JNIEnv<'static>;

/// The process-wide `JavaVM`, taken from `ndk_context` on first use.
fn java_vm() -> Result<&'static JavaVM> {
    if let Some(vm) = JAVA_VM.get() {
        return Ok(vm);
    }
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| PickerError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    Ok(JAVA_VM.get_or_init(|| vm))
}

/// Obtain a [`JNIEnv`] for the current thread, attaching it if needed.
fn jni_env() -> Result<Env> {
    java_vm()?
        .attach_current_thread_permanently()
        .map_err(|e| PickerError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Obtain the current Android `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(PickerError::Bridge(
            "Android context is null: native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `PickerError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> PickerError {
    PickerError::Bridge(format!("{context}: {e}"))
}

/// Run `f` inside its own local reference frame.
///
/// Bridge threads are attached permanently and never return to Java, so
/// locals would otherwise pile up. A Java exception left pending by a failed
/// call is cleared before returning.
fn with_jni<T>(f: impl FnOnce(&mut Env, &JObject<'static>) -> Result<T>) -> Result<T> {
    let mut env = jni_env()?;
    let activity = activity()?;
    local_frame(&mut env, LOCAL_FRAME_CAPACITY, |env| f(env, &activity))
}

/// Run `f` between `PushLocalFrame` and `PopLocalFrame` on `env`.
///
/// `f` must hand back plain Rust values only; every local it creates is
/// released when the frame is popped.
fn local_frame<'local, T>(
    env: &mut JNIEnv<'local>,
    capacity: i32,
    f: impl FnOnce(&mut JNIEnv<'local>) -> Result<T>,
) -> Result<T> {
    env.push_local_frame(capacity)
        .map_err(|e| jni_err("push_local_frame", e))?;
    let result = f(env);
    if result.is_err() {
        clear_pending_exception(env);
    }
    // SAFETY: nothing created inside the frame escapes `f`; results are
    // plain Rust values.
    unsafe { env.pop_local_frame(&JObject::null()) }.map_err(|e| jni_err("pop_local_frame", e))?;
    result
}

fn clear_pending_exception(env: &mut JNIEnv<'_>) {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the file picker bridge.
///
/// The struct is zero-sized; in-flight picks live in [`PENDING_PICKS`].
pub struct AndroidBridge;

impl AndroidBridge {
    /// Create a new Android bridge.
    ///
    /// This does **not** touch JNI; the first JNI call happens lazily when
    /// a trait method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// ActivityLauncher: Intent.ACTION_GET_CONTENT wrapped in a chooser
// ---------------------------------------------------------------------------

impl ActivityLauncher for AndroidBridge {
    /// Build the `GET_CONTENT` intent, wrap it in a chooser and dispatch it
    /// with `startActivityForResult`.
    ///
    /// Returns as soon as the intent is dispatched; the callback fires from
    /// [`Java_dev_filepicker_bridge_FilePickerResultReceiver_nativeOnActivityResult`].
    fn launch(&self, request: ChooserRequest, callback: ActivityCallback) -> Result<()> {
        let call_id = callback.call_id();
        let request_code = PENDING_PICKS.register(callback);

        let dispatched = with_jni(|env, activity| {
            let chooser = build_chooser(env, &request)?;
            env.call_method(
                activity,
                "startActivityForResult",
                "(Landroid/content/Intent;I)V",
                &[JValue::Object(&chooser), JValue::Int(request_code)],
            )
            .map_err(|e| jni_err("startActivityForResult(GET_CONTENT)", e))?;
            Ok(())
        });

        if let Err(e) = dispatched {
            drop(PENDING_PICKS.take(request_code));
            return Err(e);
        }

        tracing::info!(
            %call_id,
            request_code,
            "Android: file chooser dispatched, awaiting onActivityResult"
        );
        Ok(())
    }
}

/// `Intent.createChooser(new Intent(ACTION_GET_CONTENT) {...}, title)`
fn build_chooser(env: &mut Env, request: &ChooserRequest) -> Result<JObject<'static>> {
    let target = &request.target;

    let j_action: JString = env
        .new_string(target.action)
        .map_err(|e| jni_err("new_string(action)", e))?;

    let intent: JObject = env
        .new_object(
            "android/content/Intent",
            "(Ljava/lang/String;)V",
            &[JValue::Object(&j_action)],
        )
        .map_err(|e| jni_err("new Intent(GET_CONTENT)", e))?;

    // intent.setType("*/*")
    let j_type: JString = env
        .new_string(target.mime_type)
        .map_err(|e| jni_err("new_string(type)", e))?;
    env.call_method(
        &intent,
        "setType",
        "(Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&j_type)],
    )
    .map_err(|e| jni_err("setType", e))?;

    // intent.addCategory(Intent.CATEGORY_OPENABLE)
    for category in &target.categories {
        let j_category: JString = env
            .new_string(category)
            .map_err(|e| jni_err("new_string(category)", e))?;
        env.call_method(
            &intent,
            "addCategory",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&j_category)],
        )
        .map_err(|e| jni_err("addCategory", e))?;
    }

    // intent.putExtra(Intent.EXTRA_ALLOW_MULTIPLE, multiple)
    let j_allow_multiple: JString = env
        .new_string(EXTRA_ALLOW_MULTIPLE)
        .map_err(|e| jni_err("new_string(EXTRA_ALLOW_MULTIPLE)", e))?;
    env.call_method(
        &intent,
        "putExtra",
        "(Ljava/lang/String;Z)Landroid/content/Intent;",
        &[
            JValue::Object(&j_allow_multiple),
            JValue::Bool(if target.allow_multiple { JNI_TRUE } else { JNI_FALSE }),
        ],
    )
    .map_err(|e| jni_err("putExtra(EXTRA_ALLOW_MULTIPLE)", e))?;

    // intent.putExtra(Intent.EXTRA_MIME_TYPES, String[]), single picks only
    if let Some(types) = &target.accepted_types {
        let mime_array = string_array(env, types)?;
        let j_extra_key: JString = env
            .new_string(EXTRA_MIME_TYPES)
            .map_err(|e| jni_err("new_string(EXTRA_MIME_TYPES)", e))?;
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;[Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&j_extra_key), JValue::Object(&mime_array)],
        )
        .map_err(|e| jni_err("putExtra(EXTRA_MIME_TYPES)", e))?;
    }

    let j_title: JString = env
        .new_string(&request.title)
        .map_err(|e| jni_err("new_string(chooser_title)", e))?;

    env.call_static_method(
        "android/content/Intent",
        "createChooser",
        "(Landroid/content/Intent;Ljava/lang/CharSequence;)Landroid/content/Intent;",
        &[JValue::Object(&intent), JValue::Object(&j_title)],
    )
    .map_err(|e| jni_err("Intent.createChooser", e))?
    .l()
    .map_err(|e| jni_err("createChooser->l", e))
}

fn string_array(env: &mut Env, items: &[String]) -> Result<JObjectArray<'static>> {
    let string_class = env
        .find_class("java/lang/String")
        .map_err(|e| jni_err("find_class(String)", e))?;

    let array = env
        .new_object_array(items.len() as jsize, &string_class, &JObject::null())
        .map_err(|e| jni_err("new_object_array", e))?;

    for (i, item) in items.iter().enumerate() {
        let j_item: JString = env
            .new_string(item)
            .map_err(|e| jni_err("new_string(item)", e))?;
        env.set_object_array_element(&array, i as jsize, j_item)
            .map_err(|e| jni_err("set_object_array_element", e))?;
    }
    Ok(array)
}

// ---------------------------------------------------------------------------
// onActivityResult entry point
// ---------------------------------------------------------------------------

/// Called by the host Activity's `onActivityResult`.
///
/// Returns `JNI_TRUE` when the request code belonged to a pending pick and
/// the result was handed over.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_filepicker_bridge_FilePickerResultReceiver_nativeOnActivityResult<
    'local,
>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    request_code: jint,
    result_code: jint,
    data: JObject<'local>,
) -> jboolean {
    let payload = if result_code == RESULT_OK {
        match result_data(&mut env, &data) {
            Ok(payload) => payload,
            Err(e) => {
                clear_pending_exception(&mut env);
                tracing::error!(request_code, error = %e, "Android: could not read chooser result");
                // Dropping the callback fails the pick instead of reporting
                // an empty selection.
                return if PENDING_PICKS.take(request_code).is_some() {
                    JNI_TRUE
                } else {
                    JNI_FALSE
                };
            }
        }
    } else {
        None
    };

    if PENDING_PICKS.deliver(request_code, ActivityResult::from_raw(result_code, payload)) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

/// Pull the selected URIs out of the result `Intent`.
///
/// Clip data (multi-select) is enumerated in order; otherwise the single
/// `getData()` URI is used.
fn result_data(env: &mut JNIEnv<'_>, intent: &JObject<'_>) -> Result<Option<ResultData>> {
    if intent.is_null() {
        return Ok(None);
    }

    let clip: JObject = env
        .call_method(intent, "getClipData", "()Landroid/content/ClipData;", &[])
        .map_err(|e| jni_err("getClipData", e))?
        .l()
        .map_err(|e| jni_err("getClipData->l", e))?;

    if !clip.is_null() {
        let count = env
            .call_method(&clip, "getItemCount", "()I", &[])
            .map_err(|e| jni_err("ClipData.getItemCount", e))?
            .i()
            .map_err(|e| jni_err("getItemCount->i", e))?;

        let mut uris = Vec::with_capacity(count.max(0) as usize);
        for index in 0..count {
            // One frame per item: a large multi-select would otherwise
            // overflow the local reference table of this native call.
            let uri = local_frame(env, CLIP_ITEM_FRAME_CAPACITY, |env| {
                clip_item_uri(env, &clip, index)
            })?;
            match uri {
                Some(uri) => uris.push(uri),
                None => tracing::warn!(index, "Android: clip item carries no URI"),
            }
        }
        return Ok(Some(ResultData::clip(uris)));
    }

    let uri: JObject = env
        .call_method(intent, "getData", "()Landroid/net/Uri;", &[])
        .map_err(|e| jni_err("getData", e))?
        .l()
        .map_err(|e| jni_err("getData->l", e))?;

    Ok(Some(ResultData {
        uri: uri_to_content_uri(env, &uri)?,
        clip_data: None,
    }))
}

/// `clip.getItemAt(index).getUri()` as a [`ContentUri`].
fn clip_item_uri(
    env: &mut JNIEnv<'_>,
    clip: &JObject<'_>,
    index: jint,
) -> Result<Option<ContentUri>> {
    let item: JObject = env
        .call_method(
            clip,
            "getItemAt",
            "(I)Landroid/content/ClipData$Item;",
            &[JValue::Int(index)],
        )
        .map_err(|e| jni_err("ClipData.getItemAt", e))?
        .l()
        .map_err(|e| jni_err("getItemAt->l", e))?;
    let uri: JObject = env
        .call_method(&item, "getUri", "()Landroid/net/Uri;", &[])
        .map_err(|e| jni_err("ClipData.Item.getUri", e))?
        .l()
        .map_err(|e| jni_err("getUri->l", e))?;
    uri_to_content_uri(env, &uri)
}

fn uri_to_content_uri(env: &mut JNIEnv<'_>, uri: &JObject<'_>) -> Result<Option<ContentUri>> {
    if uri.is_null() {
        return Ok(None);
    }
    let j_str: JObject = env
        .call_method(uri, "toString", "()Ljava/lang/String;", &[])
        .map_err(|e| jni_err("Uri.toString", e))?
        .l()
        .map_err(|e| jni_err("Uri.toString->l", e))?;
    let s: String = env
        .get_string(&JString::from(j_str))
        .map_err(|e| jni_err("get_string(uri)", e))?
        .into();
    Ok(Some(ContentUri::new(s)))
}

// ---------------------------------------------------------------------------
// ContentResolver: android.content.ContentResolver
// ---------------------------------------------------------------------------

impl ContentResolver for AndroidBridge {
    /// `Uri.getPath()` for `file://` URIs; anything else is identified by
    /// the URI string itself, since a document provider need not expose a
    /// filesystem path.
    fn path(&self, uri: &ContentUri) -> Result<Option<String>> {
        if uri.scheme() != Some("file") {
            return Ok(Some(uri.to_string()));
        }
        with_jni(|env, _activity| {
            let uri_obj = parse_uri(env, uri)?;
            let j_path: JObject = env
                .call_method(&uri_obj, "getPath", "()Ljava/lang/String;", &[])
                .map_err(|e| jni_err("Uri.getPath", e))?
                .l()
                .map_err(|e| jni_err("getPath->l", e))?;
            java_string(env, j_path)
        })
    }

    fn display_name(&self, uri: &ContentUri) -> Result<Option<String>> {
        with_jni(|env, activity| {
            query_first_row(env, activity, uri, COLUMN_DISPLAY_NAME, |env, cursor, index| {
                let j_name: JObject = env
                    .call_method(cursor, "getString", "(I)Ljava/lang/String;", &[JValue::Int(index)])
                    .map_err(|e| jni_err("Cursor.getString", e))?
                    .l()
                    .map_err(|e| jni_err("getString->l", e))?;
                java_string(env, j_name)
            })
        })
    }

    fn mime_type(&self, uri: &ContentUri) -> Result<Option<String>> {
        with_jni(|env, activity| {
            let resolver = content_resolver(env, activity)?;
            let uri_obj = parse_uri(env, uri)?;
            let j_type: JObject = env
                .call_method(
                    &resolver,
                    "getType",
                    "(Landroid/net/Uri;)Ljava/lang/String;",
                    &[JValue::Object(&uri_obj)],
                )
                .map_err(|e| jni_err("ContentResolver.getType", e))?
                .l()
                .map_err(|e| jni_err("getType->l", e))?;
            java_string(env, j_type)
        })
    }

    fn size(&self, uri: &ContentUri) -> Result<Option<u64>> {
        with_jni(|env, activity| {
            query_first_row(env, activity, uri, COLUMN_SIZE, |env, cursor, index| {
                let size = env
                    .call_method(cursor, "getLong", "(I)J", &[JValue::Int(index)])
                    .map_err(|e| jni_err("Cursor.getLong", e))?
                    .j()
                    .map_err(|e| jni_err("getLong->j", e))?;
                Ok(u64::try_from(size).ok())
            })
        })
    }

    /// Read through `ContentResolver.openInputStream(uri)`, stopping once
    /// `limit` is passed.
    fn read_bytes(&self, uri: &ContentUri, limit: Option<u64>) -> Result<Vec<u8>> {
        let bytes = with_jni(|env, activity| {
            let resolver = content_resolver(env, activity)?;
            let uri_obj = parse_uri(env, uri)?;

            let input_stream: JObject = env
                .call_method(
                    &resolver,
                    "openInputStream",
                    "(Landroid/net/Uri;)Ljava/io/InputStream;",
                    &[JValue::Object(&uri_obj)],
                )
                .map_err(|e| jni_err("openInputStream", e))?
                .l()
                .map_err(|e| jni_err("openInputStream->l", e))?;

            if input_stream.is_null() {
                return Err(PickerError::Resolve {
                    uri: uri.to_string(),
                    reason: "ContentResolver returned null InputStream".into(),
                });
            }

            let read = drain_stream(env, &input_stream, uri, limit);

            // Close even when reading failed part-way.
            clear_pending_exception(env);
            env.call_method(&input_stream, "close", "()V", &[])
                .map_err(|e| jni_err("InputStream.close", e))?;

            read
        })?;

        tracing::debug!(%uri, bytes = bytes.len(), "Android: read content URI");
        Ok(bytes)
    }
}

/// Copy an `InputStream` into a `Vec<u8>` through an 8 KiB Java buffer,
/// giving up once more than `limit` bytes have arrived.
fn drain_stream(
    env: &mut Env,
    input_stream: &JObject<'_>,
    uri: &ContentUri,
    limit: Option<u64>,
) -> Result<Vec<u8>> {
    let buffer = env
        .new_byte_array(8192)
        .map_err(|e| jni_err("new_byte_array(8192)", e))?;
    let mut chunk = vec![0i8; 8192];
    let mut out = Vec::new();

    loop {
        let bytes_read: i32 = env
            .call_method(input_stream, "read", "([B)I", &[JValue::Object(&buffer)])
            .map_err(|e| jni_err("InputStream.read", e))?
            .i()
            .map_err(|e| jni_err("InputStream.read->i", e))?;

        if bytes_read < 0 {
            break;
        }
        let n = bytes_read as usize;
        env.get_byte_array_region(&buffer, 0, &mut chunk[..n])
            .map_err(|e| jni_err("get_byte_array_region", e))?;
        out.extend(chunk[..n].iter().map(|b| *b as u8));
        if let Some(limit) = limit.filter(|&limit| out.len() as u64 > limit) {
            return Err(PickerError::ContentTooLarge {
                uri: uri.to_string(),
                limit,
            });
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// `Uri.parse(uriString)`
fn parse_uri(env: &mut Env, uri: &ContentUri) -> Result<JObject<'static>> {
    let j_uri_str: JString = env
        .new_string(uri.as_str())
        .map_err(|e| jni_err("new_string(uri)", e))?;

    env.call_static_method(
        "android/net/Uri",
        "parse",
        "(Ljava/lang/String;)Landroid/net/Uri;",
        &[JValue::Object(&j_uri_str)],
    )
    .map_err(|e| jni_err("Uri.parse", e))?
    .l()
    .map_err(|e| jni_err("Uri.parse->l", e))
}

/// `activity.getContentResolver()`
fn content_resolver(env: &mut Env, activity: &JObject<'_>) -> Result<JObject<'static>> {
    env.call_method(
        activity,
        "getContentResolver",
        "()Landroid/content/ContentResolver;",
        &[],
    )
    .map_err(|e| jni_err("getContentResolver", e))?
    .l()
    .map_err(|e| jni_err("getContentResolver->l", e))
}

/// Java `String` (possibly null) to `Option<String>`.
fn java_string(env: &mut Env, obj: JObject<'static>) -> Result<Option<String>> {
    if obj.is_null() {
        return Ok(None);
    }
    let s: String = env
        .get_string(&JString::from(obj))
        .map_err(|e| jni_err("get_string", e))?
        .into();
    Ok(Some(s))
}

/// Query `uri` for one column and read it from the first row.
///
/// No cursor, no row, no such column, or a SQL NULL all yield `Ok(None)`.
/// The cursor is closed on every path.
fn query_first_row<T>(
    env: &mut Env,
    activity: &JObject<'_>,
    uri: &ContentUri,
    column: &str,
    read: impl FnOnce(&mut Env, &JObject<'static>, jint) -> Result<Option<T>>,
) -> Result<Option<T>> {
    let resolver = content_resolver(env, activity)?;
    let uri_obj = parse_uri(env, uri)?;

    // resolver.query(uri, null, null, null, null)
    let cursor: JObject = env
        .call_method(
            &resolver,
            "query",
            "(Landroid/net/Uri;[Ljava/lang/String;Ljava/lang/String;[Ljava/lang/String;Ljava/lang/String;)Landroid/database/Cursor;",
            &[
                JValue::Object(&uri_obj),
                JValue::Object(&JObject::null()),
                JValue::Object(&JObject::null()),
                JValue::Object(&JObject::null()),
                JValue::Object(&JObject::null()),
            ],
        )
        .map_err(|e| jni_err("ContentResolver.query", e))?
        .l()
        .map_err(|e| jni_err("query->l", e))?;

    if cursor.is_null() {
        return Ok(None);
    }

    let value = read_cursor_column(env, &cursor, column, read);

    clear_pending_exception(env);
    env.call_method(&cursor, "close", "()V", &[])
        .map_err(|e| jni_err("Cursor.close", e))?;

    value
}

fn read_cursor_column<T>(
    env: &mut Env,
    cursor: &JObject<'static>,
    column: &str,
    read: impl FnOnce(&mut Env, &JObject<'static>, jint) -> Result<Option<T>>,
) -> Result<Option<T>> {
    let has_row = env
        .call_method(cursor, "moveToFirst", "()Z", &[])
        .map_err(|e| jni_err("Cursor.moveToFirst", e))?
        .z()
        .map_err(|e| jni_err("moveToFirst->z", e))?;
    if !has_row {
        return Ok(None);
    }

    let j_column: JString = env
        .new_string(column)
        .map_err(|e| jni_err("new_string(column)", e))?;
    let index = env
        .call_method(
            cursor,
            "getColumnIndex",
            "(Ljava/lang/String;)I",
            &[JValue::Object(&j_column)],
        )
        .map_err(|e| jni_err("Cursor.getColumnIndex", e))?
        .i()
        .map_err(|e| jni_err("getColumnIndex->i", e))?;
    if index < 0 {
        return Ok(None);
    }

    let is_null = env
        .call_method(cursor, "isNull", "(I)Z", &[JValue::Int(index)])
        .map_err(|e| jni_err("Cursor.isNull", e))?
        .z()
        .map_err(|e| jni_err("isNull->z", e))?;
    if is_null {
        return Ok(None);
    }

    read(env, cursor, index)
}
