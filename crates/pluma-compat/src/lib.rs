// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Legacy event compatibility adapter.
//!
//! Serves plugin features deprecated since Pluma 1.0. The adapter is
//! disabled by default and enables itself when a plugin that does not
//! implement the current interface is loaded. For each lifecycle event the
//! host fires it re-dispatches the corresponding pre-1.0 event to every
//! plugin that handles it, remapping argument shapes where the old
//! signatures differ. It also back-merges a legacy root-level config file,
//! auto-enables the `parse-pages-content` and `excerpt` legacy-support
//! plugins, and hides the template-name file extension from old render
//! hooks.
//!
//! | Lifecycle event              | ... triggers the legacy event                               |
//! |------------------------------|-------------------------------------------------------------|
//! | on_plugins_loaded            | `plugins_loaded()`                                          |
//! | on_config_loaded             | `config_loaded(config)`                                     |
//! | on_request_url               | `request_url(url)`                                          |
//! | on_content_loading           | `before_load_content(file)`                                 |
//! | on_content_loaded            | `after_load_content(file, raw_content)`                     |
//! | on_404_content_loading       | `before_404_load_content(file)`                             |
//! | on_404_content_loaded        | `after_404_load_content(file, raw_content)`                 |
//! | on_meta_headers              | `before_read_file_meta(headers)`                            |
//! | on_meta_parsed               | `file_meta(meta)`                                           |
//! | on_content_parsing           | `before_parse_content(raw_content)`                         |
//! | on_content_parsed            | `after_parse_content(content)`, `content_parsed(content)`   |
//! | on_single_page_loaded        | `get_page_data(pages, meta)`                                |
//! | on_pages_loaded              | `get_pages(pages, current_page, previous_page, next_page)`  |
//! | on_template_engine_registration | `before_twig_register()`                                 |
//! | on_page_rendering            | `before_render(variables, engine, template_name)`           |
//! | on_page_rendered             | `after_render(output)`                                      |

pub mod adapter;
pub mod config;
pub mod constants;
pub mod events;

pub use adapter::{LegacyEventAdapter, EXCERPT_PLUGIN, PARSE_PAGES_CONTENT_PLUGIN};
pub use constants::{ConstantsSlot, LegacyConstants};
pub use events::{legacy_events, LifecycleEvent};
