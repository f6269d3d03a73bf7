// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `promexport/config/bootstrap/v1/bootstrap.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:promexport.config.bootstrap.v1.Config)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Config {
    // message fields
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.Config.listen)
    pub listen: ::protobuf::Chars,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.Config.admin_listen)
    pub admin_listen: ::protobuf::Chars,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.Config.export)
    pub export: ::protobuf::MessageField<ExportConfig>,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.Config.ingest)
    pub ingest: ::protobuf::MessageField<IngestConfig>,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.Config.backend)
    pub backend: ::protobuf::MessageField<BackendConfig>,
    // special fields
    // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.Config.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Config {
    fn default() -> &'a Config {
        <Config as ::protobuf::Message>::default_instance()
    }
}

impl Config {
    pub fn new() -> Config {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(5);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "listen",
            |m: &Config| { &m.listen },
            |m: &mut Config| { &mut m.listen },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "admin_listen",
            |m: &Config| { &m.admin_listen },
            |m: &mut Config| { &mut m.admin_listen },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, ExportConfig>(
            "export",
            |m: &Config| { &m.export },
            |m: &mut Config| { &mut m.export },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, IngestConfig>(
            "ingest",
            |m: &Config| { &m.ingest },
            |m: &mut Config| { &mut m.ingest },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, BackendConfig>(
            "backend",
            |m: &Config| { &m.backend },
            |m: &mut Config| { &mut m.backend },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Config>(
            "Config",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Config {
    const NAME: &'static str = "Config";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.listen = is.read_tokio_chars()?;
                },
                18 => {
                    self.admin_listen = is.read_tokio_chars()?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.export)?;
                },
                34 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.ingest)?;
                },
                42 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.backend)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.listen.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.listen);
        }
        if !self.admin_listen.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.admin_listen);
        }
        if let Some(v) = self.export.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.ingest.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.backend.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.listen.is_empty() {
            os.write_string(1, &self.listen)?;
        }
        if !self.admin_listen.is_empty() {
            os.write_string(2, &self.admin_listen)?;
        }
        if let Some(v) = self.export.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        if let Some(v) = self.ingest.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        }
        if let Some(v) = self.backend.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Config {
        Config::new()
    }

    fn clear(&mut self) {
        self.listen.clear();
        self.admin_listen.clear();
        self.export.clear();
        self.ingest.clear();
        self.backend.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Config {
        static instance: Config = Config {
            listen: ::protobuf::Chars::new(),
            admin_listen: ::protobuf::Chars::new(),
            export: ::protobuf::MessageField::none(),
            ingest: ::protobuf::MessageField::none(),
            backend: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Config {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Config").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Config {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Config {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:promexport.config.bootstrap.v1.LabelMatcher)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct LabelMatcher {
    // message fields
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.LabelMatcher.name)
    pub name: ::protobuf::Chars,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.LabelMatcher.value)
    pub value: ::protobuf::Chars,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.LabelMatcher.type)
    pub type_: ::protobuf::EnumOrUnknown<label_matcher::MatchType>,
    // special fields
    // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.LabelMatcher.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a LabelMatcher {
    fn default() -> &'a LabelMatcher {
        <LabelMatcher as ::protobuf::Message>::default_instance()
    }
}

impl LabelMatcher {
    pub fn new() -> LabelMatcher {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "name",
            |m: &LabelMatcher| { &m.name },
            |m: &mut LabelMatcher| { &mut m.name },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "value",
            |m: &LabelMatcher| { &m.value },
            |m: &mut LabelMatcher| { &mut m.value },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "type",
            |m: &LabelMatcher| { &m.type_ },
            |m: &mut LabelMatcher| { &mut m.type_ },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<LabelMatcher>(
            "LabelMatcher",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for LabelMatcher {
    const NAME: &'static str = "LabelMatcher";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.name = is.read_tokio_chars()?;
                },
                18 => {
                    self.value = is.read_tokio_chars()?;
                },
                24 => {
                    self.type_ = is.read_enum_or_unknown()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.name);
        }
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.value);
        }
        if self.type_ != ::protobuf::EnumOrUnknown::new(label_matcher::MatchType::EQUAL) {
            my_size += ::protobuf::rt::int32_size(3, self.type_.value());
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.name.is_empty() {
            os.write_string(1, &self.name)?;
        }
        if !self.value.is_empty() {
            os.write_string(2, &self.value)?;
        }
        if self.type_ != ::protobuf::EnumOrUnknown::new(label_matcher::MatchType::EQUAL) {
            os.write_enum(3, ::protobuf::EnumOrUnknown::value(&self.type_))?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> LabelMatcher {
        LabelMatcher::new()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.value.clear();
        self.type_ = ::protobuf::EnumOrUnknown::new(label_matcher::MatchType::EQUAL);
        self.special_fields.clear();
    }

    fn default_instance() -> &'static LabelMatcher {
        static instance: LabelMatcher = LabelMatcher {
            name: ::protobuf::Chars::new(),
            value: ::protobuf::Chars::new(),
            type_: ::protobuf::EnumOrUnknown::from_i32(0),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for LabelMatcher {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("LabelMatcher").unwrap()).clone()
    }
}

impl ::std::fmt::Display for LabelMatcher {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for LabelMatcher {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `LabelMatcher`
pub mod label_matcher {
    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:promexport.config.bootstrap.v1.LabelMatcher.MatchType)
    pub enum MatchType {
        // @@protoc_insertion_point(enum_value:promexport.config.bootstrap.v1.LabelMatcher.MatchType.EQUAL)
        EQUAL = 0,
        // @@protoc_insertion_point(enum_value:promexport.config.bootstrap.v1.LabelMatcher.MatchType.NOT_EQUAL)
        NOT_EQUAL = 1,
        // @@protoc_insertion_point(enum_value:promexport.config.bootstrap.v1.LabelMatcher.MatchType.REGEX)
        REGEX = 2,
        // @@protoc_insertion_point(enum_value:promexport.config.bootstrap.v1.LabelMatcher.MatchType.NOT_REGEX)
        NOT_REGEX = 3,
    }

    impl ::protobuf::Enum for MatchType {
        const NAME: &'static str = "MatchType";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<MatchType> {
            match value {
                0 => ::std::option::Option::Some(MatchType::EQUAL),
                1 => ::std::option::Option::Some(MatchType::NOT_EQUAL),
                2 => ::std::option::Option::Some(MatchType::REGEX),
                3 => ::std::option::Option::Some(MatchType::NOT_REGEX),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<MatchType> {
            match str {
                "EQUAL" => ::std::option::Option::Some(MatchType::EQUAL),
                "NOT_EQUAL" => ::std::option::Option::Some(MatchType::NOT_EQUAL),
                "REGEX" => ::std::option::Option::Some(MatchType::REGEX),
                "NOT_REGEX" => ::std::option::Option::Some(MatchType::NOT_REGEX),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [MatchType] = &[
            MatchType::EQUAL,
            MatchType::NOT_EQUAL,
            MatchType::REGEX,
            MatchType::NOT_REGEX,
        ];
    }

    impl ::protobuf::EnumFull for MatchType {
        fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().enum_by_package_relative_name("LabelMatcher.MatchType").unwrap()).clone()
        }

        fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
            let index = *self as usize;
            Self::enum_descriptor().value_by_index(index)
        }
    }

    impl ::std::default::Default for MatchType {
        fn default() -> Self {
            MatchType::EQUAL
        }
    }

    impl MatchType {
        pub(in super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
            ::protobuf::reflect::GeneratedEnumDescriptorData::new::<MatchType>("LabelMatcher.MatchType")
        }
    }
}

// @@protoc_insertion_point(message:promexport.config.bootstrap.v1.ExternalLabel)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct ExternalLabel {
    // message fields
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExternalLabel.name)
    pub name: ::protobuf::Chars,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExternalLabel.value)
    pub value: ::protobuf::Chars,
    // special fields
    // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.ExternalLabel.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a ExternalLabel {
    fn default() -> &'a ExternalLabel {
        <ExternalLabel as ::protobuf::Message>::default_instance()
    }
}

impl ExternalLabel {
    pub fn new() -> ExternalLabel {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "name",
            |m: &ExternalLabel| { &m.name },
            |m: &mut ExternalLabel| { &mut m.name },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "value",
            |m: &ExternalLabel| { &m.value },
            |m: &mut ExternalLabel| { &mut m.value },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<ExternalLabel>(
            "ExternalLabel",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for ExternalLabel {
    const NAME: &'static str = "ExternalLabel";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.name = is.read_tokio_chars()?;
                },
                18 => {
                    self.value = is.read_tokio_chars()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.name);
        }
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.value);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.name.is_empty() {
            os.write_string(1, &self.name)?;
        }
        if !self.value.is_empty() {
            os.write_string(2, &self.value)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> ExternalLabel {
        ExternalLabel::new()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.value.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static ExternalLabel {
        static instance: ExternalLabel = ExternalLabel {
            name: ::protobuf::Chars::new(),
            value: ::protobuf::Chars::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for ExternalLabel {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("ExternalLabel").unwrap()).clone()
    }
}

impl ::std::fmt::Display for ExternalLabel {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ExternalLabel {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:promexport.config.bootstrap.v1.ExportConfig)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct ExportConfig {
    // message fields
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExportConfig.metric_type_prefix)
    pub metric_type_prefix: ::protobuf::Chars,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExportConfig.external_labels)
    pub external_labels: ::std::vec::Vec<ExternalLabel>,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExportConfig.matchers)
    pub matchers: ::std::vec::Vec<LabelMatcher>,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExportConfig.gc_interval)
    pub gc_interval: ::protobuf::MessageField<::protobuf::well_known_types::duration::Duration>,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.ExportConfig.gc_inactivity_window)
    pub gc_inactivity_window: ::protobuf::MessageField<::protobuf::well_known_types::duration::Duration>,
    // special fields
    // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.ExportConfig.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a ExportConfig {
    fn default() -> &'a ExportConfig {
        <ExportConfig as ::protobuf::Message>::default_instance()
    }
}

impl ExportConfig {
    pub fn new() -> ExportConfig {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(5);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "metric_type_prefix",
            |m: &ExportConfig| { &m.metric_type_prefix },
            |m: &mut ExportConfig| { &mut m.metric_type_prefix },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "external_labels",
            |m: &ExportConfig| { &m.external_labels },
            |m: &mut ExportConfig| { &mut m.external_labels },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "matchers",
            |m: &ExportConfig| { &m.matchers },
            |m: &mut ExportConfig| { &mut m.matchers },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, ::protobuf::well_known_types::duration::Duration>(
            "gc_interval",
            |m: &ExportConfig| { &m.gc_interval },
            |m: &mut ExportConfig| { &mut m.gc_interval },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, ::protobuf::well_known_types::duration::Duration>(
            "gc_inactivity_window",
            |m: &ExportConfig| { &m.gc_inactivity_window },
            |m: &mut ExportConfig| { &mut m.gc_inactivity_window },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<ExportConfig>(
            "ExportConfig",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for ExportConfig {
    const NAME: &'static str = "ExportConfig";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.metric_type_prefix = is.read_tokio_chars()?;
                },
                18 => {
                    self.external_labels.push(is.read_message()?);
                },
                26 => {
                    self.matchers.push(is.read_message()?);
                },
                34 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.gc_interval)?;
                },
                42 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.gc_inactivity_window)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.metric_type_prefix.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.metric_type_prefix);
        }
        for value in &self.external_labels {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.matchers {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        if let Some(v) = self.gc_interval.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.gc_inactivity_window.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.metric_type_prefix.is_empty() {
            os.write_string(1, &self.metric_type_prefix)?;
        }
        for v in &self.external_labels {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        for v in &self.matchers {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        };
        if let Some(v) = self.gc_interval.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        }
        if let Some(v) = self.gc_inactivity_window.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> ExportConfig {
        ExportConfig::new()
    }

    fn clear(&mut self) {
        self.metric_type_prefix.clear();
        self.external_labels.clear();
        self.matchers.clear();
        self.gc_interval.clear();
        self.gc_inactivity_window.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static ExportConfig {
        static instance: ExportConfig = ExportConfig {
            metric_type_prefix: ::protobuf::Chars::new(),
            external_labels: ::std::vec::Vec::new(),
            matchers: ::std::vec::Vec::new(),
            gc_interval: ::protobuf::MessageField::none(),
            gc_inactivity_window: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for ExportConfig {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("ExportConfig").unwrap()).clone()
    }
}

impl ::std::fmt::Display for ExportConfig {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ExportConfig {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:promexport.config.bootstrap.v1.IngestConfig)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct IngestConfig {
    // message fields
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.IngestConfig.allow_classic_histograms)
    pub allow_classic_histograms: bool,
    // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.IngestConfig.max_concurrent_writes)
    pub max_concurrent_writes: u32,
    // special fields
    // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.IngestConfig.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a IngestConfig {
    fn default() -> &'a IngestConfig {
        <IngestConfig as ::protobuf::Message>::default_instance()
    }
}

impl IngestConfig {
    pub fn new() -> IngestConfig {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "allow_classic_histograms",
            |m: &IngestConfig| { &m.allow_classic_histograms },
            |m: &mut IngestConfig| { &mut m.allow_classic_histograms },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "max_concurrent_writes",
            |m: &IngestConfig| { &m.max_concurrent_writes },
            |m: &mut IngestConfig| { &mut m.max_concurrent_writes },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<IngestConfig>(
            "IngestConfig",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for IngestConfig {
    const NAME: &'static str = "IngestConfig";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.allow_classic_histograms = is.read_bool()?;
                },
                16 => {
                    self.max_concurrent_writes = is.read_uint32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.allow_classic_histograms != false {
            my_size += 1 + 1;
        }
        if self.max_concurrent_writes != 0 {
            my_size += ::protobuf::rt::uint32_size(2, self.max_concurrent_writes);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.allow_classic_histograms != false {
            os.write_bool(1, self.allow_classic_histograms)?;
        }
        if self.max_concurrent_writes != 0 {
            os.write_uint32(2, self.max_concurrent_writes)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> IngestConfig {
        IngestConfig::new()
    }

    fn clear(&mut self) {
        self.allow_classic_histograms = false;
        self.max_concurrent_writes = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static IngestConfig {
        static instance: IngestConfig = IngestConfig {
            allow_classic_histograms: false,
            max_concurrent_writes: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for IngestConfig {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("IngestConfig").unwrap()).clone()
    }
}

impl ::std::fmt::Display for IngestConfig {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for IngestConfig {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:promexport.config.bootstrap.v1.BackendConfig)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BackendConfig {
    // message oneof groups
    pub backend_type: ::std::option::Option<backend_config::Backend_type>,
    // special fields
    // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.BackendConfig.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BackendConfig {
    fn default() -> &'a BackendConfig {
        <BackendConfig as ::protobuf::Message>::default_instance()
    }
}

impl BackendConfig {
    pub fn new() -> BackendConfig {
        ::std::default::Default::default()
    }

    // .promexport.config.bootstrap.v1.BackendConfig.Http http = 1;

    pub fn http(&self) -> &backend_config::Http {
        match self.backend_type {
            ::std::option::Option::Some(backend_config::Backend_type::Http(ref v)) => v,
            _ => <backend_config::Http as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_http(&mut self) {
        self.backend_type = ::std::option::Option::None;
    }

    pub fn has_http(&self) -> bool {
        match self.backend_type {
            ::std::option::Option::Some(backend_config::Backend_type::Http(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_http(&mut self, v: backend_config::Http) {
        self.backend_type = ::std::option::Option::Some(backend_config::Backend_type::Http(v))
    }

    // Mutable pointer to the field.
    pub fn mut_http(&mut self) -> &mut backend_config::Http {
        if let ::std::option::Option::Some(backend_config::Backend_type::Http(_)) = self.backend_type {
        } else {
            self.backend_type = ::std::option::Option::Some(backend_config::Backend_type::Http(backend_config::Http::new()));
        }
        match self.backend_type {
            ::std::option::Option::Some(backend_config::Backend_type::Http(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_http(&mut self) -> backend_config::Http {
        if self.has_http() {
            match self.backend_type.take() {
                ::std::option::Option::Some(backend_config::Backend_type::Http(v)) => v,
                _ => panic!(),
            }
        } else {
            backend_config::Http::new()
        }
    }

    // .promexport.config.bootstrap.v1.BackendConfig.Log log = 2;

    pub fn log(&self) -> &backend_config::Log {
        match self.backend_type {
            ::std::option::Option::Some(backend_config::Backend_type::Log(ref v)) => v,
            _ => <backend_config::Log as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_log(&mut self) {
        self.backend_type = ::std::option::Option::None;
    }

    pub fn has_log(&self) -> bool {
        match self.backend_type {
            ::std::option::Option::Some(backend_config::Backend_type::Log(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_log(&mut self, v: backend_config::Log) {
        self.backend_type = ::std::option::Option::Some(backend_config::Backend_type::Log(v))
    }

    // Mutable pointer to the field.
    pub fn mut_log(&mut self) -> &mut backend_config::Log {
        if let ::std::option::Option::Some(backend_config::Backend_type::Log(_)) = self.backend_type {
        } else {
            self.backend_type = ::std::option::Option::Some(backend_config::Backend_type::Log(backend_config::Log::new()));
        }
        match self.backend_type {
            ::std::option::Option::Some(backend_config::Backend_type::Log(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_log(&mut self) -> backend_config::Log {
        if self.has_log() {
            match self.backend_type.take() {
                ::std::option::Option::Some(backend_config::Backend_type::Log(v)) => v,
                _ => panic!(),
            }
        } else {
            backend_config::Log::new()
        }
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(1);
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, backend_config::Http>(
            "http",
            BackendConfig::has_http,
            BackendConfig::http,
            BackendConfig::mut_http,
            BackendConfig::set_http,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, backend_config::Log>(
            "log",
            BackendConfig::has_log,
            BackendConfig::log,
            BackendConfig::mut_log,
            BackendConfig::set_log,
        ));
        oneofs.push(backend_config::Backend_type::generated_oneof_descriptor_data());
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BackendConfig>(
            "BackendConfig",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BackendConfig {
    const NAME: &'static str = "BackendConfig";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.backend_type = ::std::option::Option::Some(backend_config::Backend_type::Http(is.read_message()?));
                },
                18 => {
                    self.backend_type = ::std::option::Option::Some(backend_config::Backend_type::Log(is.read_message()?));
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.backend_type {
            match v {
                &backend_config::Backend_type::Http(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &backend_config::Backend_type::Log(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let ::std::option::Option::Some(ref v) = self.backend_type {
            match v {
                &backend_config::Backend_type::Http(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
                },
                &backend_config::Backend_type::Log(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
                },
            };
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BackendConfig {
        BackendConfig::new()
    }

    fn clear(&mut self) {
        self.backend_type = ::std::option::Option::None;
        self.backend_type = ::std::option::Option::None;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BackendConfig {
        static instance: BackendConfig = BackendConfig {
            backend_type: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BackendConfig {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BackendConfig").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BackendConfig {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `BackendConfig`
pub mod backend_config {

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:promexport.config.bootstrap.v1.BackendConfig.backend_type)
    pub enum Backend_type {
        // @@protoc_insertion_point(oneof_field:promexport.config.bootstrap.v1.BackendConfig.http)
        Http(Http),
        // @@protoc_insertion_point(oneof_field:promexport.config.bootstrap.v1.BackendConfig.log)
        Log(Log),
    }

    impl ::protobuf::Oneof for Backend_type {
    }

    impl ::protobuf::OneofFull for Backend_type {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::BackendConfig as ::protobuf::MessageFull>::descriptor().oneof_by_name("backend_type").unwrap()).clone()
        }
    }

    impl Backend_type {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Backend_type>("backend_type")
        }
    }
    // @@protoc_insertion_point(message:promexport.config.bootstrap.v1.BackendConfig.Http)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Http {
        // message fields
        // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.BackendConfig.Http.endpoint)
        pub endpoint: ::protobuf::Chars,
        // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.BackendConfig.Http.auth_token_env)
        pub auth_token_env: ::protobuf::Chars,
        // @@protoc_insertion_point(field:promexport.config.bootstrap.v1.BackendConfig.Http.timeout)
        pub timeout: ::protobuf::MessageField<::protobuf::well_known_types::duration::Duration>,
        // special fields
        // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.BackendConfig.Http.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Http {
        fn default() -> &'a Http {
            <Http as ::protobuf::Message>::default_instance()
        }
    }

    impl Http {
        pub fn new() -> Http {
            ::std::default::Default::default()
        }

        pub(in super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
            let mut fields = ::std::vec::Vec::with_capacity(3);
            let mut oneofs = ::std::vec::Vec::with_capacity(0);
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "endpoint",
                |m: &Http| { &m.endpoint },
                |m: &mut Http| { &mut m.endpoint },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "auth_token_env",
                |m: &Http| { &m.auth_token_env },
                |m: &mut Http| { &mut m.auth_token_env },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, ::protobuf::well_known_types::duration::Duration>(
                "timeout",
                |m: &Http| { &m.timeout },
                |m: &mut Http| { &mut m.timeout },
            ));
            ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Http>(
                "BackendConfig.Http",
                fields,
                oneofs,
            )
        }
    }

    impl ::protobuf::Message for Http {
        const NAME: &'static str = "Http";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    10 => {
                        self.endpoint = is.read_tokio_chars()?;
                    },
                    18 => {
                        self.auth_token_env = is.read_tokio_chars()?;
                    },
                    26 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.timeout)?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if !self.endpoint.is_empty() {
                my_size += ::protobuf::rt::string_size(1, &self.endpoint);
            }
            if !self.auth_token_env.is_empty() {
                my_size += ::protobuf::rt::string_size(2, &self.auth_token_env);
            }
            if let Some(v) = self.timeout.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if !self.endpoint.is_empty() {
                os.write_string(1, &self.endpoint)?;
            }
            if !self.auth_token_env.is_empty() {
                os.write_string(2, &self.auth_token_env)?;
            }
            if let Some(v) = self.timeout.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Http {
            Http::new()
        }

        fn clear(&mut self) {
            self.endpoint.clear();
            self.auth_token_env.clear();
            self.timeout.clear();
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Http {
            static instance: Http = Http {
                endpoint: ::protobuf::Chars::new(),
                auth_token_env: ::protobuf::Chars::new(),
                timeout: ::protobuf::MessageField::none(),
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    impl ::protobuf::MessageFull for Http {
        fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().message_by_package_relative_name("BackendConfig.Http").unwrap()).clone()
        }
    }

    impl ::std::fmt::Display for Http {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            ::protobuf::text_format::fmt(self, f)
        }
    }

    impl ::protobuf::reflect::ProtobufValue for Http {
        type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
    }

    // @@protoc_insertion_point(message:promexport.config.bootstrap.v1.BackendConfig.Log)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Log {
        // special fields
        // @@protoc_insertion_point(special_field:promexport.config.bootstrap.v1.BackendConfig.Log.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Log {
        fn default() -> &'a Log {
            <Log as ::protobuf::Message>::default_instance()
        }
    }

    impl Log {
        pub fn new() -> Log {
            ::std::default::Default::default()
        }

        pub(in super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
            let mut fields = ::std::vec::Vec::with_capacity(0);
            let mut oneofs = ::std::vec::Vec::with_capacity(0);
            ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Log>(
                "BackendConfig.Log",
                fields,
                oneofs,
            )
        }
    }

    impl ::protobuf::Message for Log {
        const NAME: &'static str = "Log";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Log {
            Log::new()
        }

        fn clear(&mut self) {
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Log {
            static instance: Log = Log {
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    impl ::protobuf::MessageFull for Log {
        fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().message_by_package_relative_name("BackendConfig.Log").unwrap()).clone()
        }
    }

    impl ::std::fmt::Display for Log {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            ::protobuf::text_format::fmt(self, f)
        }
    }

    impl ::protobuf::reflect::ProtobufValue for Log {
        type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n.promexport/config/bootstrap/v1/bootstrap.proto\x12\x1epromexport.conf\
    ig.bootstrap.v1\x1a\x1egoogle/protobuf/duration.proto\"\x98\x02\n\x06Con\
    fig\x12\x16\n\x06listen\x18\x01\x20\x01(\tR\x06listen\x12!\n\x0cadmin_li\
    sten\x18\x02\x20\x01(\tR\x0badminListen\x12D\n\x06export\x18\x03\x20\x01\
    (\x0b2,.promexport.config.bootstrap.v1.ExportConfigR\x06export\x12D\n\
    \x06ingest\x18\x04\x20\x01(\x0b2,.promexport.config.bootstrap.v1.IngestC\
    onfigR\x06ingest\x12G\n\x07backend\x18\x05\x20\x01(\x0b2-.promexport.con\
    fig.bootstrap.v1.BackendConfigR\x07backend\"\xc5\x01\n\x0cLabelMatcher\
    \x12\x12\n\x04name\x18\x01\x20\x01(\tR\x04name\x12\x14\n\x05value\x18\
    \x02\x20\x01(\tR\x05value\x12J\n\x04type\x18\x03\x20\x01(\x0e26.promexpo\
    rt.config.bootstrap.v1.LabelMatcher.MatchTypeR\x04type\"?\n\tMatchType\
    \x12\t\n\x05EQUAL\x10\0\x12\r\n\tNOT_EQUAL\x10\x01\x12\t\n\x05REGEX\x10\
    \x02\x12\r\n\tNOT_REGEX\x10\x03\"9\n\rExternalLabel\x12\x12\n\x04name\
    \x18\x01\x20\x01(\tR\x04name\x12\x14\n\x05value\x18\x02\x20\x01(\tR\x05v\
    alue\"\xe7\x02\n\x0cExportConfig\x12,\n\x12metric_type_prefix\x18\x01\
    \x20\x01(\tR\x10metricTypePrefix\x12V\n\x0fexternal_labels\x18\x02\x20\
    \x03(\x0b2-.promexport.config.bootstrap.v1.ExternalLabelR\x0eexternalLab\
    els\x12H\n\x08matchers\x18\x03\x20\x03(\x0b2,.promexport.config.bootstra\
    p.v1.LabelMatcherR\x08matchers\x12:\n\x0bgc_interval\x18\x04\x20\x01(\
    \x0b2\x19.google.protobuf.DurationR\ngcInterval\x12K\n\x14gc_inactivity_\
    window\x18\x05\x20\x01(\x0b2\x19.google.protobuf.DurationR\x12gcInactivi\
    tyWindow\"|\n\x0cIngestConfig\x128\n\x18allow_classic_histograms\x18\x01\
    \x20\x01(\x08R\x16allowClassicHistograms\x122\n\x15max_concurrent_writes\
    \x18\x02\x20\x01(\rR\x13maxConcurrentWrites\"\xb6\x02\n\rBackendConfig\
    \x12H\n\x04http\x18\x01\x20\x01(\x0b22.promexport.config.bootstrap.v1.Ba\
    ckendConfig.HttpH\0R\x04http\x12E\n\x03log\x18\x02\x20\x01(\x0b21.promex\
    port.config.bootstrap.v1.BackendConfig.LogH\0R\x03log\x1a}\n\x04Http\x12\
    \x1a\n\x08endpoint\x18\x01\x20\x01(\tR\x08endpoint\x12$\n\x0eauth_token_\
    env\x18\x02\x20\x01(\tR\x0cauthTokenEnv\x123\n\x07timeout\x18\x03\x20\
    \x01(\x0b2\x19.google.protobuf.DurationR\x07timeout\x1a\x05\n\x03LogB\
    \x0e\n\x0cbackend_typeb\x06proto3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(1);
            deps.push(::protobuf::well_known_types::duration::file_descriptor().clone());
            let mut messages = ::std::vec::Vec::with_capacity(8);
            messages.push(Config::generated_message_descriptor_data());
            messages.push(LabelMatcher::generated_message_descriptor_data());
            messages.push(ExternalLabel::generated_message_descriptor_data());
            messages.push(ExportConfig::generated_message_descriptor_data());
            messages.push(IngestConfig::generated_message_descriptor_data());
            messages.push(BackendConfig::generated_message_descriptor_data());
            messages.push(backend_config::Http::generated_message_descriptor_data());
            messages.push(backend_config::Log::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(1);
            enums.push(label_matcher::MatchType::generated_enum_descriptor_data());
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
