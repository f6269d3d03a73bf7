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

//! Generated file from `prometheus/write/v2/types.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:io.prometheus.write.v2.Request)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Request {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Request.symbols)
    pub symbols: ::std::vec::Vec<::protobuf::Chars>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Request.timeseries)
    pub timeseries: ::std::vec::Vec<TimeSeries>,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.Request.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Request {
    fn default() -> &'a Request {
        <Request as ::protobuf::Message>::default_instance()
    }
}

impl Request {
    pub fn new() -> Request {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "symbols",
            |m: &Request| { &m.symbols },
            |m: &mut Request| { &mut m.symbols },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "timeseries",
            |m: &Request| { &m.timeseries },
            |m: &mut Request| { &mut m.timeseries },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Request>(
            "Request",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Request {
    const NAME: &'static str = "Request";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                34 => {
                    self.symbols.push(is.read_tokio_chars()?);
                },
                42 => {
                    self.timeseries.push(is.read_message()?);
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
        for value in &self.symbols {
            my_size += ::protobuf::rt::string_size(4, &value);
        };
        for value in &self.timeseries {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.symbols {
            os.write_string(4, &v)?;
        };
        for v in &self.timeseries {
            ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Request {
        Request::new()
    }

    fn clear(&mut self) {
        self.symbols.clear();
        self.timeseries.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Request {
        static instance: Request = Request {
            symbols: ::std::vec::Vec::new(),
            timeseries: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Request {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Request").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Request {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Request {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:io.prometheus.write.v2.TimeSeries)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct TimeSeries {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.TimeSeries.labels_refs)
    pub labels_refs: ::std::vec::Vec<u32>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.TimeSeries.samples)
    pub samples: ::std::vec::Vec<Sample>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.TimeSeries.histograms)
    pub histograms: ::std::vec::Vec<Histogram>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.TimeSeries.exemplars)
    pub exemplars: ::std::vec::Vec<Exemplar>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.TimeSeries.metadata)
    pub metadata: ::protobuf::MessageField<Metadata>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.TimeSeries.created_timestamp)
    pub created_timestamp: i64,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.TimeSeries.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a TimeSeries {
    fn default() -> &'a TimeSeries {
        <TimeSeries as ::protobuf::Message>::default_instance()
    }
}

impl TimeSeries {
    pub fn new() -> TimeSeries {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(6);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "labels_refs",
            |m: &TimeSeries| { &m.labels_refs },
            |m: &mut TimeSeries| { &mut m.labels_refs },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "samples",
            |m: &TimeSeries| { &m.samples },
            |m: &mut TimeSeries| { &mut m.samples },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "histograms",
            |m: &TimeSeries| { &m.histograms },
            |m: &mut TimeSeries| { &mut m.histograms },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "exemplars",
            |m: &TimeSeries| { &m.exemplars },
            |m: &mut TimeSeries| { &mut m.exemplars },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Metadata>(
            "metadata",
            |m: &TimeSeries| { &m.metadata },
            |m: &mut TimeSeries| { &mut m.metadata },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "created_timestamp",
            |m: &TimeSeries| { &m.created_timestamp },
            |m: &mut TimeSeries| { &mut m.created_timestamp },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<TimeSeries>(
            "TimeSeries",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for TimeSeries {
    const NAME: &'static str = "TimeSeries";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    is.read_repeated_packed_uint32_into(&mut self.labels_refs)?;
                },
                8 => {
                    self.labels_refs.push(is.read_uint32()?);
                },
                18 => {
                    self.samples.push(is.read_message()?);
                },
                26 => {
                    self.histograms.push(is.read_message()?);
                },
                34 => {
                    self.exemplars.push(is.read_message()?);
                },
                42 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.metadata)?;
                },
                48 => {
                    self.created_timestamp = is.read_int64()?;
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
        my_size += ::protobuf::rt::vec_packed_uint32_size(1, &self.labels_refs);
        for value in &self.samples {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.histograms {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.exemplars {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        if let Some(v) = self.metadata.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if self.created_timestamp != 0 {
            my_size += ::protobuf::rt::int64_size(6, self.created_timestamp);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_repeated_packed_uint32(1, &self.labels_refs)?;
        for v in &self.samples {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        for v in &self.histograms {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        };
        for v in &self.exemplars {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        };
        if let Some(v) = self.metadata.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
        }
        if self.created_timestamp != 0 {
            os.write_int64(6, self.created_timestamp)?;
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

    fn new() -> TimeSeries {
        TimeSeries::new()
    }

    fn clear(&mut self) {
        self.labels_refs.clear();
        self.samples.clear();
        self.histograms.clear();
        self.exemplars.clear();
        self.metadata.clear();
        self.created_timestamp = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static TimeSeries {
        static instance: TimeSeries = TimeSeries {
            labels_refs: ::std::vec::Vec::new(),
            samples: ::std::vec::Vec::new(),
            histograms: ::std::vec::Vec::new(),
            exemplars: ::std::vec::Vec::new(),
            metadata: ::protobuf::MessageField::none(),
            created_timestamp: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for TimeSeries {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("TimeSeries").unwrap()).clone()
    }
}

impl ::std::fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TimeSeries {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:io.prometheus.write.v2.Exemplar)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Exemplar {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Exemplar.labels_refs)
    pub labels_refs: ::std::vec::Vec<u32>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Exemplar.value)
    pub value: f64,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Exemplar.timestamp)
    pub timestamp: i64,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.Exemplar.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Exemplar {
    fn default() -> &'a Exemplar {
        <Exemplar as ::protobuf::Message>::default_instance()
    }
}

impl Exemplar {
    pub fn new() -> Exemplar {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "labels_refs",
            |m: &Exemplar| { &m.labels_refs },
            |m: &mut Exemplar| { &mut m.labels_refs },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "value",
            |m: &Exemplar| { &m.value },
            |m: &mut Exemplar| { &mut m.value },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "timestamp",
            |m: &Exemplar| { &m.timestamp },
            |m: &mut Exemplar| { &mut m.timestamp },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Exemplar>(
            "Exemplar",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Exemplar {
    const NAME: &'static str = "Exemplar";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    is.read_repeated_packed_uint32_into(&mut self.labels_refs)?;
                },
                8 => {
                    self.labels_refs.push(is.read_uint32()?);
                },
                17 => {
                    self.value = is.read_double()?;
                },
                24 => {
                    self.timestamp = is.read_int64()?;
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
        my_size += ::protobuf::rt::vec_packed_uint32_size(1, &self.labels_refs);
        if self.value != 0. {
            my_size += 1 + 8;
        }
        if self.timestamp != 0 {
            my_size += ::protobuf::rt::int64_size(3, self.timestamp);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_repeated_packed_uint32(1, &self.labels_refs)?;
        if self.value != 0. {
            os.write_double(2, self.value)?;
        }
        if self.timestamp != 0 {
            os.write_int64(3, self.timestamp)?;
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

    fn new() -> Exemplar {
        Exemplar::new()
    }

    fn clear(&mut self) {
        self.labels_refs.clear();
        self.value = 0.;
        self.timestamp = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Exemplar {
        static instance: Exemplar = Exemplar {
            labels_refs: ::std::vec::Vec::new(),
            value: 0.,
            timestamp: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Exemplar {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Exemplar").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Exemplar {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Exemplar {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:io.prometheus.write.v2.Sample)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Sample {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Sample.value)
    pub value: f64,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Sample.timestamp)
    pub timestamp: i64,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.Sample.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Sample {
    fn default() -> &'a Sample {
        <Sample as ::protobuf::Message>::default_instance()
    }
}

impl Sample {
    pub fn new() -> Sample {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "value",
            |m: &Sample| { &m.value },
            |m: &mut Sample| { &mut m.value },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "timestamp",
            |m: &Sample| { &m.timestamp },
            |m: &mut Sample| { &mut m.timestamp },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Sample>(
            "Sample",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Sample {
    const NAME: &'static str = "Sample";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                9 => {
                    self.value = is.read_double()?;
                },
                16 => {
                    self.timestamp = is.read_int64()?;
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
        if self.value != 0. {
            my_size += 1 + 8;
        }
        if self.timestamp != 0 {
            my_size += ::protobuf::rt::int64_size(2, self.timestamp);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.value != 0. {
            os.write_double(1, self.value)?;
        }
        if self.timestamp != 0 {
            os.write_int64(2, self.timestamp)?;
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

    fn new() -> Sample {
        Sample::new()
    }

    fn clear(&mut self) {
        self.value = 0.;
        self.timestamp = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Sample {
        static instance: Sample = Sample {
            value: 0.,
            timestamp: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Sample {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Sample").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Sample {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Sample {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:io.prometheus.write.v2.Metadata)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Metadata {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Metadata.type)
    pub type_: ::protobuf::EnumOrUnknown<metadata::MetricType>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Metadata.help_ref)
    pub help_ref: u32,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Metadata.unit_ref)
    pub unit_ref: u32,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.Metadata.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Metadata {
    fn default() -> &'a Metadata {
        <Metadata as ::protobuf::Message>::default_instance()
    }
}

impl Metadata {
    pub fn new() -> Metadata {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "type",
            |m: &Metadata| { &m.type_ },
            |m: &mut Metadata| { &mut m.type_ },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "help_ref",
            |m: &Metadata| { &m.help_ref },
            |m: &mut Metadata| { &mut m.help_ref },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "unit_ref",
            |m: &Metadata| { &m.unit_ref },
            |m: &mut Metadata| { &mut m.unit_ref },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Metadata>(
            "Metadata",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Metadata {
    const NAME: &'static str = "Metadata";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.type_ = is.read_enum_or_unknown()?;
                },
                24 => {
                    self.help_ref = is.read_uint32()?;
                },
                32 => {
                    self.unit_ref = is.read_uint32()?;
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
        if self.type_ != ::protobuf::EnumOrUnknown::new(metadata::MetricType::METRIC_TYPE_UNSPECIFIED) {
            my_size += ::protobuf::rt::int32_size(1, self.type_.value());
        }
        if self.help_ref != 0 {
            my_size += ::protobuf::rt::uint32_size(3, self.help_ref);
        }
        if self.unit_ref != 0 {
            my_size += ::protobuf::rt::uint32_size(4, self.unit_ref);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.type_ != ::protobuf::EnumOrUnknown::new(metadata::MetricType::METRIC_TYPE_UNSPECIFIED) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.type_))?;
        }
        if self.help_ref != 0 {
            os.write_uint32(3, self.help_ref)?;
        }
        if self.unit_ref != 0 {
            os.write_uint32(4, self.unit_ref)?;
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

    fn new() -> Metadata {
        Metadata::new()
    }

    fn clear(&mut self) {
        self.type_ = ::protobuf::EnumOrUnknown::new(metadata::MetricType::METRIC_TYPE_UNSPECIFIED);
        self.help_ref = 0;
        self.unit_ref = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Metadata {
        static instance: Metadata = Metadata {
            type_: ::protobuf::EnumOrUnknown::from_i32(0),
            help_ref: 0,
            unit_ref: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Metadata {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Metadata").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Metadata {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Metadata`
pub mod metadata {
    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:io.prometheus.write.v2.Metadata.MetricType)
    pub enum MetricType {
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_UNSPECIFIED)
        METRIC_TYPE_UNSPECIFIED = 0,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_COUNTER)
        METRIC_TYPE_COUNTER = 1,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_GAUGE)
        METRIC_TYPE_GAUGE = 2,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_HISTOGRAM)
        METRIC_TYPE_HISTOGRAM = 3,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_GAUGEHISTOGRAM)
        METRIC_TYPE_GAUGEHISTOGRAM = 4,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_SUMMARY)
        METRIC_TYPE_SUMMARY = 5,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_INFO)
        METRIC_TYPE_INFO = 6,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Metadata.MetricType.METRIC_TYPE_STATESET)
        METRIC_TYPE_STATESET = 7,
    }

    impl ::protobuf::Enum for MetricType {
        const NAME: &'static str = "MetricType";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<MetricType> {
            match value {
                0 => ::std::option::Option::Some(MetricType::METRIC_TYPE_UNSPECIFIED),
                1 => ::std::option::Option::Some(MetricType::METRIC_TYPE_COUNTER),
                2 => ::std::option::Option::Some(MetricType::METRIC_TYPE_GAUGE),
                3 => ::std::option::Option::Some(MetricType::METRIC_TYPE_HISTOGRAM),
                4 => ::std::option::Option::Some(MetricType::METRIC_TYPE_GAUGEHISTOGRAM),
                5 => ::std::option::Option::Some(MetricType::METRIC_TYPE_SUMMARY),
                6 => ::std::option::Option::Some(MetricType::METRIC_TYPE_INFO),
                7 => ::std::option::Option::Some(MetricType::METRIC_TYPE_STATESET),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<MetricType> {
            match str {
                "METRIC_TYPE_UNSPECIFIED" => ::std::option::Option::Some(MetricType::METRIC_TYPE_UNSPECIFIED),
                "METRIC_TYPE_COUNTER" => ::std::option::Option::Some(MetricType::METRIC_TYPE_COUNTER),
                "METRIC_TYPE_GAUGE" => ::std::option::Option::Some(MetricType::METRIC_TYPE_GAUGE),
                "METRIC_TYPE_HISTOGRAM" => ::std::option::Option::Some(MetricType::METRIC_TYPE_HISTOGRAM),
                "METRIC_TYPE_GAUGEHISTOGRAM" => ::std::option::Option::Some(MetricType::METRIC_TYPE_GAUGEHISTOGRAM),
                "METRIC_TYPE_SUMMARY" => ::std::option::Option::Some(MetricType::METRIC_TYPE_SUMMARY),
                "METRIC_TYPE_INFO" => ::std::option::Option::Some(MetricType::METRIC_TYPE_INFO),
                "METRIC_TYPE_STATESET" => ::std::option::Option::Some(MetricType::METRIC_TYPE_STATESET),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [MetricType] = &[
            MetricType::METRIC_TYPE_UNSPECIFIED,
            MetricType::METRIC_TYPE_COUNTER,
            MetricType::METRIC_TYPE_GAUGE,
            MetricType::METRIC_TYPE_HISTOGRAM,
            MetricType::METRIC_TYPE_GAUGEHISTOGRAM,
            MetricType::METRIC_TYPE_SUMMARY,
            MetricType::METRIC_TYPE_INFO,
            MetricType::METRIC_TYPE_STATESET,
        ];
    }

    impl ::protobuf::EnumFull for MetricType {
        fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().enum_by_package_relative_name("Metadata.MetricType").unwrap()).clone()
        }

        fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
            let index = *self as usize;
            Self::enum_descriptor().value_by_index(index)
        }
    }

    impl ::std::default::Default for MetricType {
        fn default() -> Self {
            MetricType::METRIC_TYPE_UNSPECIFIED
        }
    }

    impl MetricType {
        pub(in super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
            ::protobuf::reflect::GeneratedEnumDescriptorData::new::<MetricType>("Metadata.MetricType")
        }
    }
}

// @@protoc_insertion_point(message:io.prometheus.write.v2.Histogram)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Histogram {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.sum)
    pub sum: f64,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.schema)
    pub schema: i32,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.zero_threshold)
    pub zero_threshold: f64,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.negative_spans)
    pub negative_spans: ::std::vec::Vec<BucketSpan>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.negative_deltas)
    pub negative_deltas: ::std::vec::Vec<i64>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.negative_counts)
    pub negative_counts: ::std::vec::Vec<f64>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.positive_spans)
    pub positive_spans: ::std::vec::Vec<BucketSpan>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.positive_deltas)
    pub positive_deltas: ::std::vec::Vec<i64>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.positive_counts)
    pub positive_counts: ::std::vec::Vec<f64>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.reset_hint)
    pub reset_hint: ::protobuf::EnumOrUnknown<histogram::ResetHint>,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.timestamp)
    pub timestamp: i64,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.Histogram.custom_values)
    pub custom_values: ::std::vec::Vec<f64>,
    // message oneof groups
    pub count: ::std::option::Option<histogram::Count>,
    pub zero_count: ::std::option::Option<histogram::Zero_count>,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.Histogram.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Histogram {
    fn default() -> &'a Histogram {
        <Histogram as ::protobuf::Message>::default_instance()
    }
}

impl Histogram {
    pub fn new() -> Histogram {
        ::std::default::Default::default()
    }

    // uint64 count_int = 1;

    pub fn count_int(&self) -> u64 {
        match self.count {
            ::std::option::Option::Some(histogram::Count::CountInt(v)) => v,
            _ => 0,
        }
    }

    pub fn clear_count_int(&mut self) {
        self.count = ::std::option::Option::None;
    }

    pub fn has_count_int(&self) -> bool {
        match self.count {
            ::std::option::Option::Some(histogram::Count::CountInt(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_count_int(&mut self, v: u64) {
        self.count = ::std::option::Option::Some(histogram::Count::CountInt(v))
    }

    // double count_float = 2;

    pub fn count_float(&self) -> f64 {
        match self.count {
            ::std::option::Option::Some(histogram::Count::CountFloat(v)) => v,
            _ => 0.,
        }
    }

    pub fn clear_count_float(&mut self) {
        self.count = ::std::option::Option::None;
    }

    pub fn has_count_float(&self) -> bool {
        match self.count {
            ::std::option::Option::Some(histogram::Count::CountFloat(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_count_float(&mut self, v: f64) {
        self.count = ::std::option::Option::Some(histogram::Count::CountFloat(v))
    }

    // uint64 zero_count_int = 6;

    pub fn zero_count_int(&self) -> u64 {
        match self.zero_count {
            ::std::option::Option::Some(histogram::Zero_count::ZeroCountInt(v)) => v,
            _ => 0,
        }
    }

    pub fn clear_zero_count_int(&mut self) {
        self.zero_count = ::std::option::Option::None;
    }

    pub fn has_zero_count_int(&self) -> bool {
        match self.zero_count {
            ::std::option::Option::Some(histogram::Zero_count::ZeroCountInt(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_zero_count_int(&mut self, v: u64) {
        self.zero_count = ::std::option::Option::Some(histogram::Zero_count::ZeroCountInt(v))
    }

    // double zero_count_float = 7;

    pub fn zero_count_float(&self) -> f64 {
        match self.zero_count {
            ::std::option::Option::Some(histogram::Zero_count::ZeroCountFloat(v)) => v,
            _ => 0.,
        }
    }

    pub fn clear_zero_count_float(&mut self) {
        self.zero_count = ::std::option::Option::None;
    }

    pub fn has_zero_count_float(&self) -> bool {
        match self.zero_count {
            ::std::option::Option::Some(histogram::Zero_count::ZeroCountFloat(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_zero_count_float(&mut self, v: f64) {
        self.zero_count = ::std::option::Option::Some(histogram::Zero_count::ZeroCountFloat(v))
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(16);
        let mut oneofs = ::std::vec::Vec::with_capacity(2);
        fields.push(::protobuf::reflect::rt::v2::make_oneof_copy_has_get_set_simpler_accessors::<_, _>(
            "count_int",
            Histogram::has_count_int,
            Histogram::count_int,
            Histogram::set_count_int,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_copy_has_get_set_simpler_accessors::<_, _>(
            "count_float",
            Histogram::has_count_float,
            Histogram::count_float,
            Histogram::set_count_float,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "sum",
            |m: &Histogram| { &m.sum },
            |m: &mut Histogram| { &mut m.sum },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "schema",
            |m: &Histogram| { &m.schema },
            |m: &mut Histogram| { &mut m.schema },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "zero_threshold",
            |m: &Histogram| { &m.zero_threshold },
            |m: &mut Histogram| { &mut m.zero_threshold },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_copy_has_get_set_simpler_accessors::<_, _>(
            "zero_count_int",
            Histogram::has_zero_count_int,
            Histogram::zero_count_int,
            Histogram::set_zero_count_int,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_copy_has_get_set_simpler_accessors::<_, _>(
            "zero_count_float",
            Histogram::has_zero_count_float,
            Histogram::zero_count_float,
            Histogram::set_zero_count_float,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "negative_spans",
            |m: &Histogram| { &m.negative_spans },
            |m: &mut Histogram| { &mut m.negative_spans },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "negative_deltas",
            |m: &Histogram| { &m.negative_deltas },
            |m: &mut Histogram| { &mut m.negative_deltas },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "negative_counts",
            |m: &Histogram| { &m.negative_counts },
            |m: &mut Histogram| { &mut m.negative_counts },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "positive_spans",
            |m: &Histogram| { &m.positive_spans },
            |m: &mut Histogram| { &mut m.positive_spans },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "positive_deltas",
            |m: &Histogram| { &m.positive_deltas },
            |m: &mut Histogram| { &mut m.positive_deltas },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "positive_counts",
            |m: &Histogram| { &m.positive_counts },
            |m: &mut Histogram| { &mut m.positive_counts },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "reset_hint",
            |m: &Histogram| { &m.reset_hint },
            |m: &mut Histogram| { &mut m.reset_hint },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "timestamp",
            |m: &Histogram| { &m.timestamp },
            |m: &mut Histogram| { &mut m.timestamp },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "custom_values",
            |m: &Histogram| { &m.custom_values },
            |m: &mut Histogram| { &mut m.custom_values },
        ));
        oneofs.push(histogram::Count::generated_oneof_descriptor_data());
        oneofs.push(histogram::Zero_count::generated_oneof_descriptor_data());
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Histogram>(
            "Histogram",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Histogram {
    const NAME: &'static str = "Histogram";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.count = ::std::option::Option::Some(histogram::Count::CountInt(is.read_uint64()?));
                },
                17 => {
                    self.count = ::std::option::Option::Some(histogram::Count::CountFloat(is.read_double()?));
                },
                25 => {
                    self.sum = is.read_double()?;
                },
                32 => {
                    self.schema = is.read_sint32()?;
                },
                41 => {
                    self.zero_threshold = is.read_double()?;
                },
                48 => {
                    self.zero_count = ::std::option::Option::Some(histogram::Zero_count::ZeroCountInt(is.read_uint64()?));
                },
                57 => {
                    self.zero_count = ::std::option::Option::Some(histogram::Zero_count::ZeroCountFloat(is.read_double()?));
                },
                66 => {
                    self.negative_spans.push(is.read_message()?);
                },
                74 => {
                    is.read_repeated_packed_sint64_into(&mut self.negative_deltas)?;
                },
                72 => {
                    self.negative_deltas.push(is.read_sint64()?);
                },
                82 => {
                    is.read_repeated_packed_double_into(&mut self.negative_counts)?;
                },
                81 => {
                    self.negative_counts.push(is.read_double()?);
                },
                90 => {
                    self.positive_spans.push(is.read_message()?);
                },
                98 => {
                    is.read_repeated_packed_sint64_into(&mut self.positive_deltas)?;
                },
                96 => {
                    self.positive_deltas.push(is.read_sint64()?);
                },
                106 => {
                    is.read_repeated_packed_double_into(&mut self.positive_counts)?;
                },
                105 => {
                    self.positive_counts.push(is.read_double()?);
                },
                112 => {
                    self.reset_hint = is.read_enum_or_unknown()?;
                },
                120 => {
                    self.timestamp = is.read_int64()?;
                },
                130 => {
                    is.read_repeated_packed_double_into(&mut self.custom_values)?;
                },
                129 => {
                    self.custom_values.push(is.read_double()?);
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
        if self.sum != 0. {
            my_size += 1 + 8;
        }
        if self.schema != 0 {
            my_size += ::protobuf::rt::sint32_size(4, self.schema);
        }
        if self.zero_threshold != 0. {
            my_size += 1 + 8;
        }
        for value in &self.negative_spans {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::vec_packed_sint64_size(9, &self.negative_deltas);
        my_size += ::protobuf::rt::vec_packed_double_size(10, &self.negative_counts);
        for value in &self.positive_spans {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::vec_packed_sint64_size(12, &self.positive_deltas);
        my_size += ::protobuf::rt::vec_packed_double_size(13, &self.positive_counts);
        if self.reset_hint != ::protobuf::EnumOrUnknown::new(histogram::ResetHint::RESET_HINT_UNSPECIFIED) {
            my_size += ::protobuf::rt::int32_size(14, self.reset_hint.value());
        }
        if self.timestamp != 0 {
            my_size += ::protobuf::rt::int64_size(15, self.timestamp);
        }
        my_size += ::protobuf::rt::vec_packed_double_size(16, &self.custom_values);
        if let ::std::option::Option::Some(ref v) = self.count {
            match v {
                &histogram::Count::CountInt(v) => {
                    my_size += ::protobuf::rt::uint64_size(1, v);
                },
                &histogram::Count::CountFloat(v) => {
                    my_size += 1 + 8;
                },
            };
        }
        if let ::std::option::Option::Some(ref v) = self.zero_count {
            match v {
                &histogram::Zero_count::ZeroCountInt(v) => {
                    my_size += ::protobuf::rt::uint64_size(6, v);
                },
                &histogram::Zero_count::ZeroCountFloat(v) => {
                    my_size += 1 + 8;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.sum != 0. {
            os.write_double(3, self.sum)?;
        }
        if self.schema != 0 {
            os.write_sint32(4, self.schema)?;
        }
        if self.zero_threshold != 0. {
            os.write_double(5, self.zero_threshold)?;
        }
        for v in &self.negative_spans {
            ::protobuf::rt::write_message_field_with_cached_size(8, v, os)?;
        };
        os.write_repeated_packed_sint64(9, &self.negative_deltas)?;
        os.write_repeated_packed_double(10, &self.negative_counts)?;
        for v in &self.positive_spans {
            ::protobuf::rt::write_message_field_with_cached_size(11, v, os)?;
        };
        os.write_repeated_packed_sint64(12, &self.positive_deltas)?;
        os.write_repeated_packed_double(13, &self.positive_counts)?;
        if self.reset_hint != ::protobuf::EnumOrUnknown::new(histogram::ResetHint::RESET_HINT_UNSPECIFIED) {
            os.write_enum(14, ::protobuf::EnumOrUnknown::value(&self.reset_hint))?;
        }
        if self.timestamp != 0 {
            os.write_int64(15, self.timestamp)?;
        }
        os.write_repeated_packed_double(16, &self.custom_values)?;
        if let ::std::option::Option::Some(ref v) = self.count {
            match v {
                &histogram::Count::CountInt(v) => {
                    os.write_uint64(1, v)?;
                },
                &histogram::Count::CountFloat(v) => {
                    os.write_double(2, v)?;
                },
            };
        }
        if let ::std::option::Option::Some(ref v) = self.zero_count {
            match v {
                &histogram::Zero_count::ZeroCountInt(v) => {
                    os.write_uint64(6, v)?;
                },
                &histogram::Zero_count::ZeroCountFloat(v) => {
                    os.write_double(7, v)?;
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

    fn new() -> Histogram {
        Histogram::new()
    }

    fn clear(&mut self) {
        self.count = ::std::option::Option::None;
        self.count = ::std::option::Option::None;
        self.sum = 0.;
        self.schema = 0;
        self.zero_threshold = 0.;
        self.zero_count = ::std::option::Option::None;
        self.zero_count = ::std::option::Option::None;
        self.negative_spans.clear();
        self.negative_deltas.clear();
        self.negative_counts.clear();
        self.positive_spans.clear();
        self.positive_deltas.clear();
        self.positive_counts.clear();
        self.reset_hint = ::protobuf::EnumOrUnknown::new(histogram::ResetHint::RESET_HINT_UNSPECIFIED);
        self.timestamp = 0;
        self.custom_values.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Histogram {
        static instance: Histogram = Histogram {
            sum: 0.,
            schema: 0,
            zero_threshold: 0.,
            negative_spans: ::std::vec::Vec::new(),
            negative_deltas: ::std::vec::Vec::new(),
            negative_counts: ::std::vec::Vec::new(),
            positive_spans: ::std::vec::Vec::new(),
            positive_deltas: ::std::vec::Vec::new(),
            positive_counts: ::std::vec::Vec::new(),
            reset_hint: ::protobuf::EnumOrUnknown::from_i32(0),
            timestamp: 0,
            custom_values: ::std::vec::Vec::new(),
            count: ::std::option::Option::None,
            zero_count: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Histogram {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Histogram").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Histogram {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Histogram`
pub mod histogram {

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:io.prometheus.write.v2.Histogram.count)
    pub enum Count {
        // @@protoc_insertion_point(oneof_field:io.prometheus.write.v2.Histogram.count_int)
        CountInt(u64),
        // @@protoc_insertion_point(oneof_field:io.prometheus.write.v2.Histogram.count_float)
        CountFloat(f64),
    }

    impl ::protobuf::Oneof for Count {
    }

    impl ::protobuf::OneofFull for Count {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::Histogram as ::protobuf::MessageFull>::descriptor().oneof_by_name("count").unwrap()).clone()
        }
    }

    impl Count {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Count>("count")
        }
    }

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:io.prometheus.write.v2.Histogram.zero_count)
    pub enum Zero_count {
        // @@protoc_insertion_point(oneof_field:io.prometheus.write.v2.Histogram.zero_count_int)
        ZeroCountInt(u64),
        // @@protoc_insertion_point(oneof_field:io.prometheus.write.v2.Histogram.zero_count_float)
        ZeroCountFloat(f64),
    }

    impl ::protobuf::Oneof for Zero_count {
    }

    impl ::protobuf::OneofFull for Zero_count {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::Histogram as ::protobuf::MessageFull>::descriptor().oneof_by_name("zero_count").unwrap()).clone()
        }
    }

    impl Zero_count {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Zero_count>("zero_count")
        }
    }
    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:io.prometheus.write.v2.Histogram.ResetHint)
    pub enum ResetHint {
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Histogram.ResetHint.RESET_HINT_UNSPECIFIED)
        RESET_HINT_UNSPECIFIED = 0,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Histogram.ResetHint.RESET_HINT_YES)
        RESET_HINT_YES = 1,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Histogram.ResetHint.RESET_HINT_NO)
        RESET_HINT_NO = 2,
        // @@protoc_insertion_point(enum_value:io.prometheus.write.v2.Histogram.ResetHint.RESET_HINT_GAUGE)
        RESET_HINT_GAUGE = 3,
    }

    impl ::protobuf::Enum for ResetHint {
        const NAME: &'static str = "ResetHint";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<ResetHint> {
            match value {
                0 => ::std::option::Option::Some(ResetHint::RESET_HINT_UNSPECIFIED),
                1 => ::std::option::Option::Some(ResetHint::RESET_HINT_YES),
                2 => ::std::option::Option::Some(ResetHint::RESET_HINT_NO),
                3 => ::std::option::Option::Some(ResetHint::RESET_HINT_GAUGE),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<ResetHint> {
            match str {
                "RESET_HINT_UNSPECIFIED" => ::std::option::Option::Some(ResetHint::RESET_HINT_UNSPECIFIED),
                "RESET_HINT_YES" => ::std::option::Option::Some(ResetHint::RESET_HINT_YES),
                "RESET_HINT_NO" => ::std::option::Option::Some(ResetHint::RESET_HINT_NO),
                "RESET_HINT_GAUGE" => ::std::option::Option::Some(ResetHint::RESET_HINT_GAUGE),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [ResetHint] = &[
            ResetHint::RESET_HINT_UNSPECIFIED,
            ResetHint::RESET_HINT_YES,
            ResetHint::RESET_HINT_NO,
            ResetHint::RESET_HINT_GAUGE,
        ];
    }

    impl ::protobuf::EnumFull for ResetHint {
        fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().enum_by_package_relative_name("Histogram.ResetHint").unwrap()).clone()
        }

        fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
            let index = *self as usize;
            Self::enum_descriptor().value_by_index(index)
        }
    }

    impl ::std::default::Default for ResetHint {
        fn default() -> Self {
            ResetHint::RESET_HINT_UNSPECIFIED
        }
    }

    impl ResetHint {
        pub(in super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
            ::protobuf::reflect::GeneratedEnumDescriptorData::new::<ResetHint>("Histogram.ResetHint")
        }
    }
}

// @@protoc_insertion_point(message:io.prometheus.write.v2.BucketSpan)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BucketSpan {
    // message fields
    // @@protoc_insertion_point(field:io.prometheus.write.v2.BucketSpan.offset)
    pub offset: i32,
    // @@protoc_insertion_point(field:io.prometheus.write.v2.BucketSpan.length)
    pub length: u32,
    // special fields
    // @@protoc_insertion_point(special_field:io.prometheus.write.v2.BucketSpan.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BucketSpan {
    fn default() -> &'a BucketSpan {
        <BucketSpan as ::protobuf::Message>::default_instance()
    }
}

impl BucketSpan {
    pub fn new() -> BucketSpan {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "offset",
            |m: &BucketSpan| { &m.offset },
            |m: &mut BucketSpan| { &mut m.offset },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "length",
            |m: &BucketSpan| { &m.length },
            |m: &mut BucketSpan| { &mut m.length },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BucketSpan>(
            "BucketSpan",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BucketSpan {
    const NAME: &'static str = "BucketSpan";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.offset = is.read_sint32()?;
                },
                16 => {
                    self.length = is.read_uint32()?;
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
        if self.offset != 0 {
            my_size += ::protobuf::rt::sint32_size(1, self.offset);
        }
        if self.length != 0 {
            my_size += ::protobuf::rt::uint32_size(2, self.length);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.offset != 0 {
            os.write_sint32(1, self.offset)?;
        }
        if self.length != 0 {
            os.write_uint32(2, self.length)?;
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

    fn new() -> BucketSpan {
        BucketSpan::new()
    }

    fn clear(&mut self) {
        self.offset = 0;
        self.length = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BucketSpan {
        static instance: BucketSpan = BucketSpan {
            offset: 0,
            length: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BucketSpan {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BucketSpan").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BucketSpan {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BucketSpan {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x1fprometheus/write/v2/types.proto\x12\x16io.prometheus.write.v2\"m\n\
    \x07Request\x12\x18\n\x07symbols\x18\x04\x20\x03(\tR\x07symbols\x12B\n\n\
    timeseries\x18\x05\x20\x03(\x0b2\".io.prometheus.write.v2.TimeSeriesR\nt\
    imeseriesJ\x04\x08\x01\x10\x04\"\xd5\x02\n\nTimeSeries\x12\x1f\n\x0blabe\
    ls_refs\x18\x01\x20\x03(\rR\nlabelsRefs\x128\n\x07samples\x18\x02\x20\
    \x03(\x0b2\x1e.io.prometheus.write.v2.SampleR\x07samples\x12A\n\nhistogr\
    ams\x18\x03\x20\x03(\x0b2!.io.prometheus.write.v2.HistogramR\nhistograms\
    \x12>\n\texemplars\x18\x04\x20\x03(\x0b2\x20.io.prometheus.write.v2.Exem\
    plarR\texemplars\x12<\n\x08metadata\x18\x05\x20\x01(\x0b2\x20.io.prometh\
    eus.write.v2.MetadataR\x08metadata\x12+\n\x11created_timestamp\x18\x06\
    \x20\x01(\x03R\x10createdTimestamp\"_\n\x08Exemplar\x12\x1f\n\x0blabels_\
    refs\x18\x01\x20\x03(\rR\nlabelsRefs\x12\x14\n\x05value\x18\x02\x20\x01(\
    \x01R\x05value\x12\x1c\n\ttimestamp\x18\x03\x20\x01(\x03R\ttimestamp\"<\
    \n\x06Sample\x12\x14\n\x05value\x18\x01\x20\x01(\x01R\x05value\x12\x1c\n\
    \ttimestamp\x18\x02\x20\x01(\x03R\ttimestamp\"\xe1\x02\n\x08Metadata\x12\
    ?\n\x04type\x18\x01\x20\x01(\x0e2+.io.prometheus.write.v2.Metadata.Metri\
    cTypeR\x04type\x12\x19\n\x08help_ref\x18\x03\x20\x01(\rR\x07helpRef\x12\
    \x19\n\x08unit_ref\x18\x04\x20\x01(\rR\x07unitRef\"\xdd\x01\n\nMetricTyp\
    e\x12\x1b\n\x17METRIC_TYPE_UNSPECIFIED\x10\0\x12\x17\n\x13METRIC_TYPE_CO\
    UNTER\x10\x01\x12\x15\n\x11METRIC_TYPE_GAUGE\x10\x02\x12\x19\n\x15METRIC\
    _TYPE_HISTOGRAM\x10\x03\x12\x1e\n\x1aMETRIC_TYPE_GAUGEHISTOGRAM\x10\x04\
    \x12\x17\n\x13METRIC_TYPE_SUMMARY\x10\x05\x12\x14\n\x10METRIC_TYPE_INFO\
    \x10\x06\x12\x18\n\x14METRIC_TYPE_STATESET\x10\x07\"\xb8\x06\n\tHistogra\
    m\x12\x1d\n\tcount_int\x18\x01\x20\x01(\x04H\0R\x08countInt\x12!\n\x0bco\
    unt_float\x18\x02\x20\x01(\x01H\0R\ncountFloat\x12\x10\n\x03sum\x18\x03\
    \x20\x01(\x01R\x03sum\x12\x16\n\x06schema\x18\x04\x20\x01(\x11R\x06schem\
    a\x12%\n\x0ezero_threshold\x18\x05\x20\x01(\x01R\rzeroThreshold\x12&\n\
    \x0ezero_count_int\x18\x06\x20\x01(\x04H\x01R\x0czeroCountInt\x12*\n\x10\
    zero_count_float\x18\x07\x20\x01(\x01H\x01R\x0ezeroCountFloat\x12I\n\x0e\
    negative_spans\x18\x08\x20\x03(\x0b2\".io.prometheus.write.v2.BucketSpan\
    R\rnegativeSpans\x12'\n\x0fnegative_deltas\x18\t\x20\x03(\x12R\x0enegati\
    veDeltas\x12'\n\x0fnegative_counts\x18\n\x20\x03(\x01R\x0enegativeCounts\
    \x12I\n\x0epositive_spans\x18\x0b\x20\x03(\x0b2\".io.prometheus.write.v2\
    .BucketSpanR\rpositiveSpans\x12'\n\x0fpositive_deltas\x18\x0c\x20\x03(\
    \x12R\x0epositiveDeltas\x12'\n\x0fpositive_counts\x18\r\x20\x03(\x01R\
    \x0epositiveCounts\x12J\n\nreset_hint\x18\x0e\x20\x01(\x0e2+.io.promethe\
    us.write.v2.Histogram.ResetHintR\tresetHint\x12\x1c\n\ttimestamp\x18\x0f\
    \x20\x01(\x03R\ttimestamp\x12#\n\rcustom_values\x18\x10\x20\x03(\x01R\
    \x0ccustomValues\"d\n\tResetHint\x12\x1a\n\x16RESET_HINT_UNSPECIFIED\x10\
    \0\x12\x12\n\x0eRESET_HINT_YES\x10\x01\x12\x11\n\rRESET_HINT_NO\x10\x02\
    \x12\x14\n\x10RESET_HINT_GAUGE\x10\x03B\x07\n\x05countB\x0c\n\nzero_coun\
    t\"<\n\nBucketSpan\x12\x16\n\x06offset\x18\x01\x20\x01(\x11R\x06offset\
    \x12\x16\n\x06length\x18\x02\x20\x01(\rR\x06lengthb\x06proto3\
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
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(7);
            messages.push(Request::generated_message_descriptor_data());
            messages.push(TimeSeries::generated_message_descriptor_data());
            messages.push(Exemplar::generated_message_descriptor_data());
            messages.push(Sample::generated_message_descriptor_data());
            messages.push(Metadata::generated_message_descriptor_data());
            messages.push(Histogram::generated_message_descriptor_data());
            messages.push(BucketSpan::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(2);
            enums.push(metadata::MetricType::generated_enum_descriptor_data());
            enums.push(histogram::ResetHint::generated_enum_descriptor_data());
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
