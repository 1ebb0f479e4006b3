// Dweve BTool - Benchmark Result Tabulation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canned result files.
//!
//! All documents declare the `clasp-3.3.0` system with the settings
//! `default` and `trendy` and the `seq-suite` benchmark with one class
//! `queens` holding `q8.lp` and `q9.lp`.

/// One run per instance under two settings.
///
/// | instance | default time/timeout | trendy time/timeout |
/// |----------|----------------------|---------------------|
/// | q8.lp    | 7 / 0                | 10 / 1              |
/// | q9.lp    | 10 / 1               | 8 / 0               |
pub const TWO_SETTINGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
  <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
  <config name="seq-generic" template="templates/seq-generic.sh"/>
  <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
    <setting name="default" cmdline="--stats"/>
    <setting name="trendy" cmdline="--configuration=trendy"/>
  </system>
  <seqjob name="seq-gen" timeout="120" runs="1" parallel="8"/>
  <benchmark name="seq-suite">
    <class name="queens" id="0">
      <instance name="q8.lp" id="0"/>
      <instance name="q9.lp" id="1"/>
    </class>
  </benchmark>
  <project name="clasp-big" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0">
        <instance id="0">
          <run number="1">
            <measure name="time" type="float" val="7.0"/>
            <measure name="timeout" type="float" val="0"/>
            <measure name="status" type="string" val="SAT"/>
          </run>
        </instance>
        <instance id="1">
          <run number="1">
            <measure name="time" type="float" val="10.0"/>
            <measure name="timeout" type="float" val="1"/>
            <measure name="status" type="string" val="UNKNOWN"/>
          </run>
        </instance>
      </class>
    </runspec>
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="trendy">
      <class id="0">
        <instance id="0">
          <run number="1">
            <measure name="time" type="float" val="10.0"/>
            <measure name="timeout" type="float" val="1"/>
            <measure name="status" type="string" val="UNKNOWN"/>
          </run>
        </instance>
        <instance id="1">
          <run number="1">
            <measure name="time" type="float" val="8.0"/>
            <measure name="timeout" type="float" val="0"/>
            <measure name="status" type="string" val="SAT"/>
          </run>
        </instance>
      </class>
    </runspec>
  </project>
</result>"#;

/// Three runs per instance under two settings.
///
/// | instance | default time | trendy time |
/// |----------|--------------|-------------|
/// | q8.lp    | 7, 8, 9      | 12, 13, 14  |
/// | q9.lp    | 20, 21, 22   | 10, 11, 12  |
pub const MULTI_RUN: &str = r#"<result>
  <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
  <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
    <setting name="default" cmdline="--stats"/>
    <setting name="trendy" cmdline="--configuration=trendy"/>
  </system>
  <seqjob name="seq-gen" timeout="2:00" runs="3" parallel="8"/>
  <benchmark name="seq-suite">
    <class name="queens" id="0">
      <instance name="q8.lp" id="0"/>
      <instance name="q9.lp" id="1"/>
    </class>
  </benchmark>
  <project name="clasp-big" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0">
        <instance id="0">
          <run number="1"><measure name="time" type="float" val="7"/></run>
          <run number="2"><measure name="time" type="float" val="8"/></run>
          <run number="3"><measure name="time" type="float" val="9"/></run>
        </instance>
        <instance id="1">
          <run number="1"><measure name="time" type="float" val="20"/></run>
          <run number="2"><measure name="time" type="float" val="21"/></run>
          <run number="3"><measure name="time" type="float" val="22"/></run>
        </instance>
      </class>
    </runspec>
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="trendy">
      <class id="0">
        <instance id="0">
          <run number="1"><measure name="time" type="float" val="12"/></run>
          <run number="2"><measure name="time" type="float" val="13"/></run>
          <run number="3"><measure name="time" type="float" val="14"/></run>
        </instance>
        <instance id="1">
          <run number="1"><measure name="time" type="float" val="10"/></run>
          <run number="2"><measure name="time" type="float" val="11"/></run>
          <run number="3"><measure name="time" type="float" val="12"/></run>
        </instance>
      </class>
    </runspec>
  </project>
</result>"#;

/// The `default` setting on two machines, one run per instance.
pub const MULTI_MACHINE: &str = r#"<result>
  <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
  <machine name="hilbert" cpu="4x Xeon" memory="8GB"/>
  <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
    <setting name="default" cmdline="--stats"/>
  </system>
  <seqjob name="seq-gen" timeout="120" runs="1" parallel="8"/>
  <benchmark name="seq-suite">
    <class name="queens" id="0">
      <instance name="q8.lp" id="0"/>
    </class>
  </benchmark>
  <project name="clasp-big" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0"><instance id="0"><run number="1">
        <measure name="time" type="float" val="3"/>
      </run></instance></class>
    </runspec>
    <runspec machine="hilbert" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0"><instance id="0"><run number="1">
        <measure name="time" type="float" val="9"/>
      </run></instance></class>
    </runspec>
  </project>
</result>"#;

/// `default` has no time for `q9.lp`.
///
/// | instance | default time | trendy time |
/// |----------|--------------|-------------|
/// | q8.lp    | 10           | 7           |
/// | q9.lp    | -            | 5           |
pub const MISSING_VALUES: &str = r#"<result>
  <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
  <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
    <setting name="default" cmdline="--stats"/>
    <setting name="trendy" cmdline="--configuration=trendy"/>
  </system>
  <benchmark name="seq-suite">
    <class name="queens" id="0">
      <instance name="q8.lp" id="0"/>
      <instance name="q9.lp" id="1"/>
    </class>
  </benchmark>
  <project name="clasp-big" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0">
        <instance id="0"><run number="1">
          <measure name="time" type="float" val="10"/>
          <measure name="timeout" type="float" val="0"/>
        </run></instance>
        <instance id="1"><run number="1">
          <measure name="timeout" type="float" val="1"/>
        </run></instance>
      </class>
    </runspec>
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="trendy">
      <class id="0">
        <instance id="0"><run number="1">
          <measure name="time" type="float" val="7"/>
          <measure name="timeout" type="float" val="0"/>
        </run></instance>
        <instance id="1"><run number="1">
          <measure name="time" type="float" val="5"/>
          <measure name="timeout" type="float" val="0"/>
        </run></instance>
      </class>
    </runspec>
  </project>
</result>"#;

/// `trendy` never reports a time.
pub const DEGENERATE: &str = r#"<result>
  <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
  <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
    <setting name="default" cmdline="--stats"/>
    <setting name="trendy" cmdline="--configuration=trendy"/>
  </system>
  <benchmark name="seq-suite">
    <class name="queens" id="0">
      <instance name="q8.lp" id="0"/>
      <instance name="q9.lp" id="1"/>
    </class>
  </benchmark>
  <project name="clasp-big" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0">
        <instance id="0"><run number="1">
          <measure name="time" type="float" val="1"/>
          <measure name="timeout" type="float" val="0"/>
        </run></instance>
        <instance id="1"><run number="1">
          <measure name="time" type="float" val="2"/>
          <measure name="timeout" type="float" val="0"/>
        </run></instance>
      </class>
    </runspec>
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="trendy">
      <class id="0">
        <instance id="0"><run number="1">
          <measure name="timeout" type="float" val="1"/>
        </run></instance>
        <instance id="1"><run number="1">
          <measure name="timeout" type="float" val="1"/>
        </run></instance>
      </class>
    </runspec>
  </project>
</result>"#;

/// Each setting in its own project.
pub const TWO_PROJECTS: &str = r#"<result>
  <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
  <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
    <setting name="default" cmdline="--stats"/>
    <setting name="trendy" cmdline="--configuration=trendy"/>
  </system>
  <benchmark name="seq-suite">
    <class name="queens" id="0">
      <instance name="q8.lp" id="0"/>
    </class>
  </benchmark>
  <project name="clasp-default" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
      <class id="0"><instance id="0"><run number="1">
        <measure name="time" type="float" val="4"/>
      </run></instance></class>
    </runspec>
  </project>
  <project name="clasp-trendy" job="seq-gen">
    <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="trendy">
      <class id="0"><instance id="0"><run number="1">
        <measure name="time" type="float" val="6"/>
      </run></instance></class>
    </runspec>
  </project>
</result>"#;
