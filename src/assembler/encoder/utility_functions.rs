/*
Copyright 2026 The Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use crate::assembler::encoder::constants::FIRST_SPECIAL_REGISTER;
use crate::ast::Register;

pub fn is_special(reg: Register) -> bool {
    reg.index() >= FIRST_SPECIAL_REGISTER
}

pub fn low3(reg: Register) -> u16 {
    (reg.index() & 0x7) as u16
}
